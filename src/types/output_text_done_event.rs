use serde::{Deserialize, Serialize};

/// Marks one output text item as complete.
///
/// All of the item's text has already arrived as deltas, so consumers treat
/// this as a line continuation rather than new content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputTextDoneEvent {
    /// The complete text of the item, when the service repeats it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn done_with_text() {
        let event: OutputTextDoneEvent =
            serde_json::from_value(json!({"text": "Hello!"})).unwrap();
        assert_eq!(event.text.as_deref(), Some("Hello!"));
    }

    #[test]
    fn done_without_text() {
        let event: OutputTextDoneEvent = serde_json::from_value(json!({})).unwrap();
        assert!(event.text.is_none());
    }
}

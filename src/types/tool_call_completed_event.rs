use serde::{Deserialize, Serialize};

/// A tool call has finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCallCompletedEvent {
    /// The final structured result, if the tool returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completed_deserialization() {
        let event: ToolCallCompletedEvent =
            serde_json::from_value(json!({"result": {"rows": 7}})).unwrap();
        assert_eq!(event.result.unwrap()["rows"], 7);
    }

    #[test]
    fn completed_without_result() {
        let event: ToolCallCompletedEvent = serde_json::from_value(json!({})).unwrap();
        assert!(event.result.is_none());
    }
}

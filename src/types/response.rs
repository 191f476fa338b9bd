use serde::{Deserialize, Serialize};

/// The final response object delivered at the end of a stream.
///
/// The service exposes the concatenated output text directly on the final
/// object; intermediate structure (individual output items, tool traffic)
/// has already been streamed as events and is not repeated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Identifier assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Concatenated text of every output item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,
}

impl Response {
    /// The output text, or the empty string when the response carried none.
    pub fn output_text(&self) -> &str {
        self.output_text.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_deserialization() {
        let json = json!({
            "id": "resp_012345",
            "output_text": "Hello!"
        });

        let response: Response = serde_json::from_value(json).unwrap();
        assert_eq!(response.id.as_deref(), Some("resp_012345"));
        assert_eq!(response.output_text(), "Hello!");
    }

    #[test]
    fn response_tolerates_extra_fields() {
        let json = json!({
            "id": "resp_012345",
            "output_text": "Hello!",
            "status": "completed",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        });

        let response: Response = serde_json::from_value(json).unwrap();
        assert_eq!(response.output_text(), "Hello!");
    }

    #[test]
    fn empty_response() {
        let response = Response::default();
        assert_eq!(response.output_text(), "");
    }
}

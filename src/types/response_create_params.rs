use serde::{Deserialize, Serialize};

use crate::types::{Model, ToolParam, Turn};

/// Parameters for creating a response.
///
/// The full turn sequence is carried on every request; the service holds no
/// conversation state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCreateParams {
    /// The model that generates the response.
    pub model: Model,

    /// The ordered turn sequence, oldest first.
    pub input: Vec<Turn>,

    /// Tools the model may invoke while responding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolParam>>,

    /// Whether the response is delivered as a stream of events.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
}

impl ResponseCreateParams {
    /// Create new parameters for a non-streaming request.
    pub fn new(model: Model, input: Vec<Turn>) -> Self {
        Self {
            model,
            input,
            tools: None,
            stream: false,
        }
    }

    /// Create new parameters for a streaming request.
    pub fn new_streaming(model: Model, input: Vec<Turn>) -> Self {
        Self {
            model,
            input,
            tools: None,
            stream: true,
        }
    }

    /// Attach tools to the request.
    pub fn with_tools(mut self, tools: Vec<ToolParam>) -> Self {
        self.tools = Some(tools);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KnownModel, McpToolParam};
    use serde_json::{json, to_value};
    use url::Url;

    #[test]
    fn params_without_tools_omit_the_field() {
        let params = ResponseCreateParams::new_streaming(
            Model::Known(KnownModel::Gpt5Mini),
            vec![Turn::user("Hello")],
        );
        let json = to_value(&params).unwrap();

        assert_eq!(
            json,
            json!({
                "model": "gpt-5-mini",
                "input": [
                    {
                        "role": "user",
                        "content": [{"type": "input_text", "text": "Hello"}]
                    }
                ],
                "stream": true
            })
        );
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn params_with_tools() {
        let url = Url::parse("https://tools.example.com/mcp/").unwrap();
        let params = ResponseCreateParams::new_streaming(
            Model::Known(KnownModel::Gpt5Mini),
            vec![Turn::user("Hello")],
        )
        .with_tools(vec![ToolParam::Mcp(McpToolParam::new("analytics", url))]);

        let json = to_value(&params).unwrap();
        assert_eq!(json["tools"][0]["type"], "mcp");
        assert_eq!(json["tools"][0]["require_approval"], "never");
    }

    #[test]
    fn non_streaming_params_omit_stream_flag() {
        let params = ResponseCreateParams::new(
            Model::Known(KnownModel::Gpt5Mini),
            vec![Turn::user("Hello")],
        );
        let json = to_value(&params).unwrap();
        assert!(json.get("stream").is_none());
    }
}

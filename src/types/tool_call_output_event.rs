use serde::{Deserialize, Serialize};

/// Output produced by an in-flight tool call.
///
/// Tools may stream text a fragment at a time (`is_streaming` keeps the
/// cursor on the same line) or return a single structured payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCallOutputEvent {
    /// Textual output, if the tool produced any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,

    /// Binary image output; rendered as a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_image: Option<serde_json::Value>,

    /// Whether more output for the same call follows.
    #[serde(default)]
    pub is_streaming: bool,
}

use serde::{Deserialize, Serialize};

/// A fragment of a tool call's streamed arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCallDeltaEvent {
    /// The argument fragment, as structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args_delta: Option<serde_json::Value>,
}

use serde::{Deserialize, Serialize};

/// Reference to the tool a call targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRef {
    /// The tool's name.
    pub name: String,
}

/// The model has begun a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallBeginEvent {
    /// The tool being called.
    pub tool: ToolRef,

    /// Identifier correlating this call's events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,

    /// Arguments known at call start, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,
}

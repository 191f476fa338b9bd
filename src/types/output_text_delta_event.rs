use serde::{Deserialize, Serialize};

/// An incremental fragment of output text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputTextDeltaEvent {
    /// The text fragment.
    pub delta: String,
}

impl OutputTextDeltaEvent {
    /// Create a new `OutputTextDeltaEvent` with the given fragment.
    pub fn new(delta: impl Into<String>) -> Self {
        Self {
            delta: delta.into(),
        }
    }
}

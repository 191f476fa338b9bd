use serde::{Deserialize, Serialize};

use crate::types::Response;

/// The terminal event of a successful stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseCompletedEvent {
    /// The final response object.
    #[serde(default)]
    pub response: Response,
}

use serde::{Deserialize, Serialize};

/// The service reported an error while producing the response.
///
/// The payload shape varies by failure, so it is carried opaquely; no
/// further events follow for the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseErrorEvent {
    /// The error payload as delivered.
    pub error: serde_json::Value,
}

use serde::{Deserialize, Serialize};

use crate::types::{
    OutputTextDeltaEvent, OutputTextDoneEvent, ResponseCompletedEvent, ResponseErrorEvent,
    ToolCallBeginEvent, ToolCallCompletedEvent, ToolCallDeltaEvent, ToolCallOutputEvent,
};

/// An event in a response stream.
///
/// This enum represents the events a streaming response delivers while it is
/// produced. Text arrives as deltas, tool traffic as the four tool-call
/// variants, and the stream terminates with `response.completed`,
/// `response.error`, or the end of the connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ResponseStreamEvent {
    /// An incremental fragment of output text.
    #[serde(rename = "response.output_text.delta")]
    OutputTextDelta(OutputTextDeltaEvent),

    /// One output text item is complete.
    #[serde(rename = "response.output_text.done")]
    OutputTextDone(OutputTextDoneEvent),

    /// The model has begun a tool call.
    #[serde(rename = "response.tool_call.begin")]
    ToolCallBegin(ToolCallBeginEvent),

    /// A fragment of a tool call's streamed arguments.
    #[serde(rename = "response.tool_call.delta")]
    ToolCallDelta(ToolCallDeltaEvent),

    /// Output produced by an in-flight tool call.
    #[serde(rename = "response.tool_call.output")]
    ToolCallOutput(ToolCallOutputEvent),

    /// A tool call has finished.
    #[serde(rename = "response.tool_call.completed")]
    ToolCallCompleted(ToolCallCompletedEvent),

    /// The service reported an error; no further events follow.
    #[serde(rename = "response.error")]
    Error(ResponseErrorEvent),

    /// The terminal event of a successful stream.
    #[serde(rename = "response.completed")]
    Completed(ResponseCompletedEvent),

    /// Any event type this client does not render.
    ///
    /// The service emits bookkeeping events (response.created,
    /// response.in_progress, item lifecycle markers) that carry nothing a
    /// terminal client displays.
    #[serde(other)]
    Unknown,
}

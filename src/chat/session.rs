//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the conversation
//! turn sequence and drives one request/response exchange per user input.

use futures::{Stream, StreamExt};

use crate::chat::config::ChatConfig;
use crate::chat::render::{Renderer, pretty_json};
use crate::client::OpenAi;
use crate::error::Result;
use crate::observability::{CHAT_EXCHANGE_ERRORS, CHAT_EXCHANGES, CHAT_TOOL_EVENTS};
use crate::types::{
    Model, Response, ResponseCreateParams, ResponseStreamEvent, ToolParam, Turn,
};

/// A chat session that manages conversation state and API interactions.
///
/// The session owns the ordered turn sequence. The first turn is always the
/// system turn, seeded at construction; one user and one assistant turn are
/// appended per successful exchange. The full sequence is replayed on every
/// request because the service is stateless across calls.
pub struct ChatSession {
    client: OpenAi,
    config: ChatConfig,
    turns: Vec<Turn>,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: Model,

    /// The number of turns in the conversation, system turn included.
    pub turn_count: usize,

    /// Whether the remote tool extension is attached to requests.
    pub tools_enabled: bool,

    /// Whether tool event traces are rendered.
    pub trace: bool,

    /// Label of the configured tool server.
    pub tool_label: String,
}

/// What one drained event stream produced.
///
/// The accumulated text is the pending reply; it only becomes an assistant
/// turn if the stream finished without an error event.
#[derive(Debug, Default)]
struct StreamOutcome {
    text: String,
    completed: Option<Response>,
    errored: bool,
}

impl StreamOutcome {
    /// The reply text, preferring the final response object when it carries
    /// one (streams that end without a completed event fall back to the
    /// accumulated fragments).
    fn reply(self) -> String {
        match self.completed {
            Some(response) if !response.output_text().is_empty() => {
                response.output_text().to_string()
            }
            _ => self.text,
        }
    }
}

impl ChatSession {
    /// Creates a new chat session with the given client and configuration.
    ///
    /// The turn sequence starts with the configured system turn.
    pub fn new(client: OpenAi, config: ChatConfig) -> Self {
        let turns = vec![Turn::system(&config.system_prompt)];
        Self {
            client,
            config,
            turns,
        }
    }

    /// Sends a user message and streams the response.
    ///
    /// This method:
    /// 1. Adds the user message to the turn sequence
    /// 2. Sends a streaming request carrying the full sequence
    /// 3. Renders response events as they arrive
    /// 4. Adds the complete assistant reply to the sequence
    ///
    /// Returns the assistant's reply text. Every failure is rendered through
    /// the renderer and absorbed into an empty reply; the session stays
    /// usable and no assistant turn is appended. Whitespace-only input is
    /// rejected without appending a user turn.
    pub async fn send_streaming(&mut self, user_input: &str, renderer: &mut dyn Renderer) -> String {
        let user_input = user_input.trim();
        if user_input.is_empty() {
            return String::new();
        }

        CHAT_EXCHANGES.click();
        self.turns.push(Turn::user(user_input));

        renderer.begin_assistant();

        let stream = match self.client.stream(self.request_params()).await {
            Ok(stream) => stream,
            Err(err) => {
                CHAT_EXCHANGE_ERRORS.click();
                renderer.print_error(&err.to_string());
                return String::new();
            }
        };

        self.finish_exchange(stream, renderer).await
    }

    /// Drains the event stream and finalizes the exchange.
    ///
    /// The stream (and with it the network connection) is dropped before
    /// this returns, whichever way the exchange ends.
    async fn finish_exchange<S>(&mut self, stream: S, renderer: &mut dyn Renderer) -> String
    where
        S: Stream<Item = Result<ResponseStreamEvent>>,
    {
        match drain_stream(stream, renderer, self.config.trace).await {
            Ok(outcome) if outcome.errored => {
                CHAT_EXCHANGE_ERRORS.click();
                String::new()
            }
            Ok(outcome) => {
                let reply = outcome.reply();
                self.turns.push(Turn::assistant(&reply));
                renderer.finish_response();
                reply
            }
            Err(err) => {
                CHAT_EXCHANGE_ERRORS.click();
                renderer.print_error(&err.to_string());
                String::new()
            }
        }
    }

    /// Builds the request parameters for the next exchange.
    fn request_params(&self) -> ResponseCreateParams {
        let mut params = ResponseCreateParams::new_streaming(
            self.config.model.clone(),
            self.turns.clone(),
        );
        if self.config.tools_enabled {
            params = params.with_tools(vec![ToolParam::Mcp(self.config.tool.clone())]);
        }
        params
    }

    /// Clears the conversation history back to the system turn.
    pub fn clear(&mut self) {
        self.turns.truncate(1);
    }

    /// Returns the conversation turns, system turn first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of turns in the conversation.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Changes the model used for responses.
    pub fn set_model(&mut self, model: Model) {
        self.config.model = model;
    }

    /// Returns the current model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Enables or disables trace-mode rendering.
    pub fn set_trace(&mut self, trace: bool) {
        self.config.trace = trace;
    }

    /// Returns whether trace-mode rendering is enabled.
    pub fn trace(&self) -> bool {
        self.config.trace
    }

    /// Enables or disables the remote tool extension.
    pub fn set_tools_enabled(&mut self, enabled: bool) {
        self.config.tools_enabled = enabled;
    }

    /// Returns whether the remote tool extension is attached to requests.
    pub fn tools_enabled(&self) -> bool {
        self.config.tools_enabled
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            turn_count: self.turn_count(),
            tools_enabled: self.config.tools_enabled,
            trace: self.config.trace,
            tool_label: self.config.tool.server_label.clone(),
        }
    }
}

/// Consumes a live event stream, rendering as events arrive.
///
/// Text fragments are written immediately and accumulated into the pending
/// reply. Tool events render only in trace mode; the remote tool still runs
/// either way and its effects surface in the final text. An error event
/// renders its payload and halts consumption; a transport error propagates
/// to the caller. Either way the events after the failure are never seen.
async fn drain_stream<S>(
    stream: S,
    renderer: &mut dyn Renderer,
    trace: bool,
) -> Result<StreamOutcome>
where
    S: Stream<Item = Result<ResponseStreamEvent>>,
{
    futures::pin_mut!(stream);

    let mut outcome = StreamOutcome::default();

    while let Some(event) = stream.next().await {
        match event? {
            ResponseStreamEvent::OutputTextDelta(event) => {
                renderer.print_text(&event.delta);
                outcome.text.push_str(&event.delta);
            }
            // All of the item's text already arrived as deltas.
            ResponseStreamEvent::OutputTextDone(_) => {}
            ResponseStreamEvent::ToolCallBegin(event) => {
                CHAT_TOOL_EVENTS.click();
                if trace {
                    renderer.tool_call_begin(
                        &event.tool.name,
                        event.call_id.as_deref(),
                        event.args.as_ref(),
                    );
                }
            }
            ResponseStreamEvent::ToolCallDelta(event) => {
                CHAT_TOOL_EVENTS.click();
                if trace && let Some(args_delta) = &event.args_delta {
                    renderer.tool_call_delta(args_delta);
                }
            }
            ResponseStreamEvent::ToolCallOutput(event) => {
                CHAT_TOOL_EVENTS.click();
                if trace {
                    renderer.tool_call_output(
                        event.output_text.as_deref(),
                        event.output_image.is_some(),
                        event.is_streaming,
                    );
                }
            }
            ResponseStreamEvent::ToolCallCompleted(event) => {
                CHAT_TOOL_EVENTS.click();
                if trace {
                    renderer.tool_call_completed(event.result.as_ref());
                }
            }
            ResponseStreamEvent::Error(event) => {
                renderer.print_error(&pretty_json(&event.error));
                outcome.errored = true;
                break;
            }
            ResponseStreamEvent::Completed(event) => {
                outcome.completed = Some(event.response);
            }
            ResponseStreamEvent::Unknown => {}
        }
    }

    Ok(outcome)
}

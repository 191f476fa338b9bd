//! Chat application module for interactive conversations over the
//! Responses API.
//!
//! This module provides a streaming REPL chat interface built on top of the
//! responsum client. It supports:
//!
//! - Streaming responses with real-time token display
//! - Colorized section banners and key/value lines
//! - An optional remote MCP tool extension with trace-mode event rendering
//! - Slash commands for session control
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and API interaction
//! - [`render`]: Terminal output rendering
//! - [`commands`]: Slash command parsing and handling

mod commands;
mod config;
mod render;
mod session;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use render::{Renderer, SectionRenderer, user_prompt};
pub use session::{ChatSession, SessionStats};

//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `clap` and configuration
//! structures for controlling chat behavior.

use clap::Parser;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{KnownModel, McpToolParam, Model};

/// Default system instruction for the conversation.
///
/// The model is asked for an optional brief rationale section; the phrasing
/// deliberately rules out step-by-step reasoning.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant in a CLI. \
    When appropriate, include a very brief section titled 'Reasoning (brief):' \
    with 1-2 short sentences that summarize your plan; do not reveal \
    chain-of-thought or step-by-step reasoning.";

/// Default label for the remote tool server.
const DEFAULT_TOOL_LABEL: &str = "google-analytics-mcp";

/// Default endpoint for the remote tool server.
const DEFAULT_TOOL_URL: &str = "https://tom-nominated-beneficial-joining.trycloudflare.com/mcp/";

/// Command-line arguments for the responsum-chat tool.
#[derive(Parser, Debug, Default)]
#[command(
    name = "responsum-chat",
    about = "Interactive streaming chat over the Responses API"
)]
pub struct ChatArgs {
    /// Initial user message.
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Model to use (default: gpt-5-mini).
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Disable the remote tool extension.
    #[arg(long)]
    pub no_tools: bool,

    /// Show detailed tool event traces.
    #[arg(long)]
    pub trace: bool,

    /// System prompt for the conversation.
    #[arg(long, value_name = "PROMPT")]
    pub system: Option<String>,

    /// Label for the remote tool server.
    #[arg(long, value_name = "LABEL")]
    pub tool_label: Option<String>,

    /// Endpoint URL for the remote tool server.
    #[arg(long, value_name = "URL")]
    pub tool_url: Option<String>,

    /// Disable ANSI colors/styles.
    #[arg(long)]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// System prompt seeding the conversation.
    pub system_prompt: String,

    /// Whether the remote tool extension is attached to requests.
    pub tools_enabled: bool,

    /// Whether tool event traces are rendered.
    pub trace: bool,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Descriptor for the remote tool server.
    pub tool: McpToolParam,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gpt-5-mini
    /// - Tools: enabled
    /// - Trace: disabled
    /// - Color: enabled
    pub fn new() -> Self {
        let server_url = Url::parse(DEFAULT_TOOL_URL).expect("default tool URL should parse");
        Self {
            model: Model::Known(KnownModel::Gpt5Mini),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            tools_enabled: true,
            trace: false,
            use_color: true,
            tool: McpToolParam::new(DEFAULT_TOOL_LABEL, server_url),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Enables or disables the remote tool extension.
    pub fn with_tools_enabled(mut self, enabled: bool) -> Self {
        self.tools_enabled = enabled;
        self
    }

    /// Enables or disables trace-mode rendering.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the remote tool descriptor.
    pub fn with_tool(mut self, tool: McpToolParam) -> Self {
        self.tool = tool;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<ChatArgs> for ChatConfig {
    type Error = Error;

    fn try_from(args: ChatArgs) -> Result<Self> {
        let mut config = ChatConfig::new();

        if let Some(model) = args.model {
            config.model = Model::from(model);
        }
        if let Some(system) = args.system {
            config.system_prompt = system;
        }
        if let Some(label) = args.tool_label {
            config.tool.server_label = label;
        }
        if let Some(url) = args.tool_url {
            config.tool.server_url = Url::parse(&url)
                .map_err(|e| Error::url(format!("invalid --tool-url '{url}': {e}"), Some(e)))?;
        }
        config.tools_enabled = !args.no_tools;
        config.trace = args.trace;
        config.use_color = !args.no_color;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.model, Model::Known(KnownModel::Gpt5Mini));
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(config.tools_enabled);
        assert!(!config.trace);
        assert!(config.use_color);
        assert_eq!(config.tool.server_label, DEFAULT_TOOL_LABEL);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::try_from(args).unwrap();
        assert_eq!(config.model, Model::Known(KnownModel::Gpt5Mini));
        assert!(config.tools_enabled);
        assert!(!config.trace);
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            message: None,
            model: Some("gpt-5".to_string()),
            no_tools: true,
            trace: true,
            system: Some("Answer tersely.".to_string()),
            tool_label: Some("analytics".to_string()),
            tool_url: Some("https://tools.example.com/mcp/".to_string()),
            no_color: true,
        };
        let config = ChatConfig::try_from(args).unwrap();
        assert_eq!(config.model, Model::Known(KnownModel::Gpt5));
        assert!(!config.tools_enabled);
        assert!(config.trace);
        assert!(!config.use_color);
        assert_eq!(config.system_prompt, "Answer tersely.");
        assert_eq!(config.tool.server_label, "analytics");
        assert_eq!(config.tool.server_url.as_str(), "https://tools.example.com/mcp/");
    }

    #[test]
    fn invalid_tool_url_is_rejected() {
        let args = ChatArgs {
            tool_url: Some("not a url".to_string()),
            ..ChatArgs::default()
        };
        let err = ChatConfig::try_from(args).unwrap_err();
        assert!(matches!(err, Error::Url { .. }));
    }

    #[test]
    fn config_builder_pattern() {
        let url = Url::parse("https://tools.example.com/mcp/").unwrap();
        let config = ChatConfig::new()
            .with_model(Model::from("gpt-4o"))
            .with_system_prompt("Test prompt")
            .with_tools_enabled(false)
            .with_trace(true)
            .without_color()
            .with_tool(McpToolParam::new("analytics", url));

        assert_eq!(config.model, Model::Known(KnownModel::Gpt4o));
        assert_eq!(config.system_prompt, "Test prompt");
        assert!(!config.tools_enabled);
        assert!(config.trace);
        assert!(!config.use_color);
        assert_eq!(config.tool.server_label, "analytics");
    }

    #[test]
    fn args_parse_short_message_flag() {
        let args = ChatArgs::parse_from(["responsum-chat", "-m", "hello", "--trace"]);
        assert_eq!(args.message.as_deref(), Some("hello"));
        assert!(args.trace);
    }
}

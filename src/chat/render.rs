//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction so the session
//! can stream output without knowing how it is displayed. The default
//! implementation writes colorized section banners and key/value lines with
//! ANSI escape codes; formatting helpers are stateless functions taking
//! explicit color parameters.

use std::io::{self, Stdout, Write};

use serde_json::Value;

/// ANSI escape code to reset all styling.
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for bold text.
pub const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for dim text.
pub const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for green text (assistant output).
pub const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for cyan text (user prompts).
pub const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (tool calls).
pub const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for blue text (tool output).
pub const ANSI_BLUE: &str = "\x1b[34m";

/// ANSI escape code for red text (errors).
pub const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for gray text (labels).
pub const ANSI_GRAY: &str = "\x1b[90m";

/// Format a section banner.
///
/// Produces a line like `── Title ──────` in the given color, or uncolored
/// when `use_color` is false.
pub fn bar(title: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("\n{color}{ANSI_BOLD}── {title} ─────────────────────────────────────────{ANSI_RESET}")
    } else {
        format!("\n── {title} ─────────────────────────────────────────")
    }
}

/// Format an indented key/value line.
pub fn kv(label: &str, value: &str, color_label: &str, use_color: bool) -> String {
    if use_color {
        format!("  {color_label}{label}:{ANSI_RESET} {value}")
    } else {
        format!("  {label}: {value}")
    }
}

/// Format structured data for display.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// The readline prompt for user input.
pub fn user_prompt(use_color: bool) -> String {
    if use_color {
        format!("{ANSI_BOLD}You:{ANSI_RESET} ")
    } else {
        "You: ".to_string()
    }
}

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies: colorized
/// terminal output, plain text for piping, or a recording sink in tests.
pub trait Renderer: Send {
    /// Print the banner introducing the user's input prompt.
    fn begin_user(&mut self);

    /// Print the banner introducing a streamed assistant reply.
    fn begin_assistant(&mut self);

    /// Print a chunk of response text.
    ///
    /// This is called incrementally as fragments are streamed from the API.
    fn print_text(&mut self, text: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Called when the model begins a tool call.
    fn tool_call_begin(&mut self, name: &str, call_id: Option<&str>, args: Option<&Value>);

    /// Print a streamed fragment of a tool call's arguments.
    fn tool_call_delta(&mut self, args_delta: &Value);

    /// Print output produced by an in-flight tool call.
    ///
    /// `is_streaming` keeps the cursor on the same line so subsequent
    /// fragments continue it.
    fn tool_call_output(&mut self, text: Option<&str>, has_image: bool, is_streaming: bool);

    /// Print the final structured result of a tool call.
    fn tool_call_completed(&mut self, result: Option<&Value>);

    /// Called when a response is complete.
    ///
    /// Used to ensure proper newlines and cleanup after streaming.
    fn finish_response(&mut self);
}

/// Terminal renderer with colorized section banners.
pub struct SectionRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl SectionRenderer {
    /// Creates a new SectionRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new SectionRenderer with the specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout to ensure immediate display of streamed content.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for SectionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SectionRenderer {
    fn begin_user(&mut self) {
        println!("{}", bar("You", ANSI_CYAN, self.use_color));
    }

    fn begin_assistant(&mut self) {
        println!("{}", bar("Assistant", ANSI_GREEN, self.use_color));
        if self.use_color {
            print!("{ANSI_GREEN}{ANSI_BOLD}Assistant:{ANSI_RESET} ");
        } else {
            print!("Assistant: ");
        }
        self.flush();
    }

    fn print_text(&mut self, text: &str) {
        print!("{text}");
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{info}{ANSI_RESET}");
        } else {
            println!("{info}");
        }
    }

    fn print_error(&mut self, error: &str) {
        println!("{}", bar("Error", ANSI_RED, self.use_color));
        if self.use_color {
            println!("{ANSI_RED}{error}{ANSI_RESET}");
        } else {
            println!("{error}");
        }
    }

    fn tool_call_begin(&mut self, name: &str, call_id: Option<&str>, args: Option<&Value>) {
        println!("{}", bar("Tool Call Begin", ANSI_YELLOW, self.use_color));
        println!("{}", kv("tool", name, ANSI_YELLOW, self.use_color));
        if let Some(call_id) = call_id {
            println!("{}", kv("call_id", call_id, ANSI_GRAY, self.use_color));
        }
        if let Some(args) = args {
            println!("{}", pretty_json(args));
        }
    }

    fn tool_call_delta(&mut self, args_delta: &Value) {
        println!("{}", kv("args_delta", "", ANSI_YELLOW, self.use_color));
        println!("{}", pretty_json(args_delta));
    }

    fn tool_call_output(&mut self, text: Option<&str>, has_image: bool, is_streaming: bool) {
        println!("{}", bar("Tool Output", ANSI_BLUE, self.use_color));
        if let Some(text) = text {
            if is_streaming {
                print!("{text}");
                self.flush();
            } else {
                println!("{text}");
            }
        }
        if has_image {
            println!(
                "{}",
                kv("output_image", "[binary image]", ANSI_BLUE, self.use_color)
            );
        }
    }

    fn tool_call_completed(&mut self, result: Option<&Value>) {
        println!("{}", bar("Tool Call Completed", ANSI_YELLOW, self.use_color));
        if let Some(result) = result {
            println!("{}", pretty_json(result));
        }
    }

    fn finish_response(&mut self) {
        println!();
        self.flush();
    }
}

//! Interactive chat application over the Responses API.
//!
//! This binary provides a streaming REPL interface: user messages go to the
//! hosted inference service, response events stream back to the terminal,
//! and an optional remote MCP tool extension is attached to every request.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! responsum-chat
//!
//! # Open with an initial message
//! responsum-chat -m "How many sessions did we get last week?"
//!
//! # Specify a model
//! responsum-chat --model gpt-5
//!
//! # Disable the remote tool extension
//! responsum-chat --no-tools
//!
//! # Show detailed tool event traces
//! responsum-chat --trace
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear conversation history
//! - `/model <name>` - Change the model
//! - `/trace on|off` - Show or hide tool event traces
//! - `/tools on|off` - Enable or disable the remote tool extension
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use responsum::Model;
use responsum::OpenAi;
use responsum::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, Renderer, SectionRenderer, help_text,
    parse_command, user_prompt,
};

/// Main entry point for the responsum-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = ChatArgs::parse();
    let initial_message = args.message.take();
    let config = ChatConfig::try_from(args)?;
    let use_color = config.use_color;

    let client = OpenAi::new(None)?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = SectionRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    // The interrupt is all-or-nothing: farewell, then exit. At the prompt
    // rustyline owns the terminal and reports Ctrl+C as ReadlineError
    // instead; this handler fires while an exchange streams.
    let handler_farewell = farewell(use_color);
    ctrlc::set_handler(move || {
        println!("\n{handler_farewell}");
        std::process::exit(130);
    })?;

    println!("responsum chat (model: {})", session.model());
    println!("Type /help for commands, /quit to exit");

    let prompt = user_prompt(use_color);

    if let Some(message) = initial_message {
        let message = message.trim().to_string();
        if !message.is_empty() {
            renderer.begin_user();
            println!("{prompt}{message}");
            session.send_streaming(&message, &mut renderer).await;
        }
    }

    loop {
        renderer.begin_user();

        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("{}", farewell(use_color));
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Model(model_name) => {
                            session.set_model(Model::from(model_name.as_str()));
                            renderer.print_info(&format!("Model changed to: {}", model_name));
                        }
                        ChatCommand::Trace(enabled) => {
                            session.set_trace(enabled);
                            if enabled {
                                renderer.print_info("Tool event traces shown.");
                            } else {
                                renderer.print_info("Tool event traces hidden.");
                            }
                        }
                        ChatCommand::Tools(enabled) => {
                            session.set_tools_enabled(enabled);
                            if enabled {
                                renderer.print_info("Remote tool extension enabled.");
                            } else {
                                renderer.print_info("Remote tool extension disabled.");
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to API
                session.send_streaming(line, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\n{}", farewell(use_color));
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn farewell(use_color: bool) -> String {
    if use_color {
        "\x1b[2mBye! \u{1f44b}\x1b[0m".to_string()
    } else {
        "Bye! \u{1f44b}".to_string()
    }
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", stats.model);
    println!("      Turns: {}", stats.turn_count);
    println!(
        "      Tools: {}",
        if stats.tools_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!(
        "      Trace: {}",
        if stats.trace { "shown" } else { "hidden" }
    );
    println!("      Tool server: {}", stats.tool_label);
}

//! REPL (Read-Eval-Print Loop) for not251 commands

use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};
use tracing::debug;

/// Interactive command loop
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Repl {
            editor,
            registry: create_registry(),
            ctx: CommandContext::new(),
        })
    }

    /// Run one line through the registry and print its outcome.
    /// Returns false when the loop should stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        debug!(line, "command");
        match self.registry.execute(line, &mut self.ctx) {
            CommandResult::Success => {}
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Exit => {
                println!("{}", "Goodbye!".bright_cyan());
                return false;
            }
            CommandResult::Error(e) => {
                println!("{} {}", "Error:".bright_red().bold(), e.red());
            }
            CommandResult::NotACommand => {
                println!(
                    "{} {} (try '{}')",
                    "Unknown command:".bright_red().bold(),
                    line.red(),
                    "help".bright_green()
                );
            }
        }
        true
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!("{}", "not251 music-theory algebra".bright_cyan().bold());
        println!(
            "Type commands like: {}, {}, {}",
            "scale".cyan(),
            "chord 4".cyan(),
            "voicing 0 4".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        loop {
            let prompt = format!("{} ", "not251>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);
                    if !self.handle_line(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}

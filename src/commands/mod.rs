//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod general;
pub mod harmony;

use crate::types::{scale, ChordParams, ScaleParams};
use not251_core::PositionVector;

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No registered command matches the input
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Session state shared by command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Scale every chord and search is built on
    pub scale: ScaleParams,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current scale as positions
    pub fn current_scale(&self) -> PositionVector {
        scale(&self.scale)
    }

    /// Default triad on `degree` of the current scale
    pub fn triad(&self, degree: i64) -> ChordParams {
        ChordParams::triad(self.current_scale()).with_degree(degree)
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix (e.g., "scale root")
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = input[prefix.len()..].trim();
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register("scale root", harmony::cmd_scale_root);
    registry.register("scale mode", harmony::cmd_scale_mode);
    registry.register("scale", harmony::cmd_scale);
    registry.register("chord", harmony::cmd_chord);
    registry.register("voicing", harmony::cmd_voicing);
    registry.register("mode", harmony::cmd_mode);
    registry.register("root", harmony::cmd_root);

    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}

/// Parse `0,4,7` (spaces allowed) into integers.
pub fn parse_list(args: &str) -> Result<Vec<i64>, String> {
    args.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| format!("'{}' is not an integer", s))
        })
        .collect()
}

/// Parse a single integer argument.
pub fn parse_int(args: &str) -> Result<i64, String> {
    args.trim()
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not an integer", args.trim()))
}

//! General REPL commands (help, quit)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Print help information
fn print_help() {
    println!("{}", "not251 Help".bold());
    println!("{}", "===========".bold());
    println!();
    println!("{}", "Scales:".green());
    println!("  {}                - Show the current scale", "scale".cyan());
    println!(
        "  {}  - Replace the step pattern",
        "scale 2,2,1,2,2,2,1".cyan()
    );
    println!("  {}           - Set the root", "scale root 2".cyan());
    println!("  {}           - Set the mode (rotation)", "scale mode 5".cyan());
    println!();
    println!("{}", "Chords:".green());
    println!("  {}              - Triad on a scale degree", "chord 4".cyan());
    println!(
        "  {}          - Voice degree 4 closest to degree 0",
        "voicing 0 4".cyan()
    );
    println!();
    println!("{}", "Analysis:".green());
    println!(
        "  {}              - Closest mode holding the notes",
        "mode 61".cyan()
    );
    println!(
        "  {}            - Best transposition holding the notes",
        "root 6,1".cyan()
    );
    println!();
    println!("{}", "Examples:".green());
    println!("  not251> {}", "chord 0".cyan());
    println!("  [60, 64, 67] (mod 12, span 12)");
    println!();
    println!("  not251> {}", "voicing 0 4".cyan());
    println!("  [60, 64, 67] (mod 12, span 12) -> [59, 62, 67] (mod 12, span 12) (position -2)");
    println!();
    println!(
        "Type {} or {} to leave. Set {} to see search details.",
        "quit".bright_red(),
        "exit".bright_red(),
        "RUST_LOG=not251=debug".bright_yellow()
    );
}

//! Harmony commands (scale, chord, voicing, mode, root)

use crate::commands::{parse_int, parse_list, CommandContext, CommandResult};
use crate::types::{auto_voicing_params, chord, find_mode, scale, ScaleParams, TWELVE_TET};
use colored::*;
use not251_core::search::ModeSearch;
use not251_core::{auto_root, IntervalVector};
use tracing::debug;

/// Handle `scale [steps]`: show the current scale, or replace its steps
pub fn cmd_scale(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if !args.is_empty() {
        let steps = match parse_list(args) {
            Ok(steps) => steps,
            Err(e) => return CommandResult::Error(e),
        };
        match IntervalVector::new(steps, TWELVE_TET, 0) {
            Ok(intervals) => {
                ctx.scale.intervals = intervals;
                ctx.scale.mode = 0;
            }
            Err(e) => return CommandResult::Error(e.to_string()),
        }
    }
    CommandResult::Message(format!("{}", ctx.current_scale()))
}

/// Handle `scale root <n>`
pub fn cmd_scale_root(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match parse_int(args) {
        Ok(root) => {
            ctx.scale.root = root;
            CommandResult::Message(format!("{}", ctx.current_scale()))
        }
        Err(e) => CommandResult::Error(e),
    }
}

/// Handle `scale mode <n>`
pub fn cmd_scale_mode(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match parse_int(args) {
        Ok(mode) => {
            ctx.scale.mode = mode;
            CommandResult::Message(format!("{}", ctx.current_scale()))
        }
        Err(e) => CommandResult::Error(e),
    }
}

/// Handle `chord [degree]`
pub fn cmd_chord(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let degree = if args.is_empty() {
        0
    } else {
        match parse_int(args) {
            Ok(degree) => degree,
            Err(e) => return CommandResult::Error(e),
        }
    };

    match chord(&ctx.triad(degree)) {
        Ok(voicing) => CommandResult::Message(format!("{}", voicing)),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `voicing <from> <to>`: voice the triad on `to` against the one on `from`
pub fn cmd_voicing(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let degrees: Vec<&str> = args.split_whitespace().collect();
    let [from, to] = degrees.as_slice() else {
        return CommandResult::Error("Usage: voicing <from degree> <to degree>".to_string());
    };
    let (from, to) = match (parse_int(from), parse_int(to)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => return CommandResult::Error(e),
    };

    let reference = ctx.triad(from);
    let target = ctx.triad(to);
    let voiced = auto_voicing_params(&reference, &target)
        .and_then(|params| Ok((params.position, chord(&reference)?, chord(&params)?)));

    match voiced {
        Ok((position, from_chord, to_chord)) => {
            debug!(from, to, position, "voicing");
            CommandResult::Message(format!(
                "{} {} {} {}",
                from_chord,
                "->".bright_black(),
                to_chord,
                format!("(position {})", position).bright_black()
            ))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `mode <notes>`: switch to the mode of the current scale holding the notes
pub fn cmd_mode(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let notes = match parse_list(args) {
        Ok(notes) if !notes.is_empty() => notes,
        Ok(_) => return CommandResult::Error("Usage: mode <n,n,...>".to_string()),
        Err(e) => return CommandResult::Error(e),
    };

    match find_mode(&ctx.scale, &notes) {
        ModeSearch::Found { rotation, vector } => {
            ctx.scale.mode = rotation as i64;
            CommandResult::Message(format!(
                "{} {}",
                format!("Mode {}:", rotation).bright_green(),
                vector
            ))
        }
        ModeSearch::NotFound { .. } => {
            CommandResult::Error(format!("No mode of the current scale holds {:?}", notes))
        }
    }
}

/// Handle `root <notes>`: best transposition of the current scale for the notes
pub fn cmd_root(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let notes = match parse_list(args) {
        Ok(notes) if !notes.is_empty() => notes,
        Ok(_) => return CommandResult::Error("Usage: root <n,n,...>".to_string()),
        Err(e) => return CommandResult::Error(e),
    };

    let unrooted = ScaleParams {
        root: 0,
        ..ctx.scale.clone()
    };
    match auto_root(&scale(&unrooted), &notes) {
        Some(root) => CommandResult::Message(format!(
            "{} {}",
            format!("Root {}:", root).bright_green(),
            scale(&ScaleParams { root, ..unrooted })
        )),
        None => CommandResult::Error(format!("No transposition of the current scale holds {:?}", notes)),
    }
}

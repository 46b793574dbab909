//! # not251
//!
//! not251 is a symbolic music-theory library built on cyclic integer vectors.
//! The vector algebra and the rotation searches live in `not251-core`; this
//! crate assembles scales and chords from them with musical defaults and
//! provides an interactive shell.
//!
//! ## Modules
//!
//! - `types`: scale and chord assembly, voicing and mode helpers working on
//!   parameter sets, plus degree analysis and quantization.
//! - `commands`: the command registry used by the shell.
//! - `repl`: the Read-Eval-Print Loop.

pub mod commands;
pub mod repl;
pub mod types;

// Re-export commonly used types and functions for convenience
pub use crate::types::{
    auto_mode_params, auto_voicing_params, chord, scale, ChordParams, ScaleParams, TWELVE_TET,
};
pub use not251_core::{IntervalVector, PositionVector, VectorError};

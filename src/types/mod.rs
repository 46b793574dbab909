// src/types/mod.rs

pub mod analysis;
pub mod chord;
pub mod scale;

pub use analysis::{
    degree_detect, degree_detect_all, quantize, transpose_between, Transposition,
};
pub use chord::{auto_voicing_params, chord, ChordParams, NegativeParams, Selection};
pub use scale::{auto_mode_params, find_mode, scale, MirrorParams, ScaleParams};

/// Steps per octave in twelve-tone equal temperament.
pub const TWELVE_TET: i64 = 12;

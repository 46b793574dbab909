//! Scale assembly from an interval pattern.

use crate::types::TWELVE_TET;
use not251_core::search::{auto_mode, ModeSearch};
use not251_core::types::to_positions;
use not251_core::{IntervalVector, PositionVector};
use std::fmt;

/// Where to reflect the interval pattern, and which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorParams {
    pub position: i64,
    pub left: bool,
}

/// Everything needed to build a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub intervals: IntervalVector,
    /// Offset of the first position
    pub root: i64,
    /// Rotation of the interval pattern
    pub mode: i64,
    /// Rotation of the resulting positions
    pub degree: i64,
    pub invert: bool,
    pub mirror: Option<MirrorParams>,
}

impl ScaleParams {
    pub fn new(intervals: IntervalVector) -> Self {
        ScaleParams {
            intervals,
            root: 0,
            mode: 0,
            degree: 0,
            invert: false,
            mirror: None,
        }
    }

    /// The 12-TET major scale on 0.
    pub fn major() -> Self {
        let intervals = IntervalVector::new(vec![2, 2, 1, 2, 2, 2, 1], TWELVE_TET, 0)
            .unwrap_or_else(|_| unreachable!("major intervals are valid"));
        Self::new(intervals)
    }

    pub fn with_root(mut self, root: i64) -> Self {
        self.root = root;
        self
    }

    pub fn with_mode(mut self, mode: i64) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_degree(mut self, degree: i64) -> Self {
        self.degree = degree;
        self
    }
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self::major()
    }
}

impl fmt::Display for ScaleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} root {} mode {} degree {}",
            self.intervals, self.root, self.mode, self.degree
        )?;
        if self.invert {
            write!(f, " inverted")?;
        }
        if let Some(mirror) = self.mirror {
            let side = if mirror.left { "left" } else { "right" };
            write!(f, " mirrored {} of {}", side, mirror.position)?;
        }
        Ok(())
    }
}

/// Build the scale described by `params`.
///
/// The pattern is anchored on `root`, rotated by `mode`, optionally reversed
/// and mirrored, unfolded into positions and finally rotated by `degree`.
pub fn scale(params: &ScaleParams) -> PositionVector {
    let mut intervals = params
        .intervals
        .clone()
        .with_offset(params.root)
        .rotated(params.mode);
    if params.invert {
        intervals = intervals.invert();
    }
    if let Some(mirror) = params.mirror {
        intervals = intervals.single_mirror(mirror.position, mirror.left);
    }

    to_positions(&intervals)
        .with_updated_span()
        .rotated(params.degree)
}

/// Run the mode search on the pattern of `params`, anchored on its root.
pub fn find_mode(params: &ScaleParams, notes: &[i64]) -> ModeSearch {
    let intervals = params.intervals.clone().with_offset(params.root);
    auto_mode(&intervals, notes)
}

/// `params` with `mode` set to the rotation that best holds `notes`.
/// Unchanged when no rotation holds them.
pub fn auto_mode_params(params: &ScaleParams, notes: &[i64]) -> ScaleParams {
    let mut out = params.clone();
    if let Some(rotation) = find_mode(params, notes).rotation() {
        out.mode = rotation as i64;
    }
    out
}

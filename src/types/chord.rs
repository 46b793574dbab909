//! Chord assembly on top of a scale.

use crate::types::scale::{scale, ScaleParams};
use crate::types::TWELVE_TET;
use anyhow::{Context, Result};
use not251_core::types::select_from_interval;
use not251_core::{auto_voicing, IntervalVector, PositionVector};
use tracing::debug;

/// How chord tones are picked from the scale.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Explicit scale indices, e.g. `[0, 2, 4]`.
    Positions(PositionVector),
    /// Steps between consecutive scale indices, e.g. `<2>` for stacked thirds.
    Intervals(IntervalVector),
}

/// Reflection applied after the voicing is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeParams {
    pub position: i64,
    pub standard: bool,
}

impl Default for NegativeParams {
    fn default() -> Self {
        NegativeParams {
            position: 10,
            standard: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChordParams {
    pub scale: PositionVector,
    pub degree: i64,
    pub selection: Selection,
    /// Voices taken from the selection
    pub pre_voices: usize,
    /// Rotation of the selected voices
    pub position: i64,
    /// Voices kept after the rotation
    pub post_voices: usize,
    pub invert: bool,
    pub negative: Option<NegativeParams>,
    pub root: i64,
    pub octave: i64,
}

impl ChordParams {
    /// Stacked-thirds triad on degree 0 of `scale`, in octave 5.
    pub fn triad(scale: PositionVector) -> Self {
        let thirds = IntervalVector::new(vec![2], TWELVE_TET, 0)
            .unwrap_or_else(|_| unreachable!("thirds selector is valid"));
        ChordParams {
            scale,
            degree: 0,
            selection: Selection::Intervals(thirds),
            pre_voices: 3,
            position: 0,
            post_voices: 3,
            invert: false,
            negative: None,
            root: 0,
            octave: 5,
        }
    }

    pub fn with_degree(mut self, degree: i64) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    pub fn with_root(mut self, root: i64) -> Self {
        self.root = root;
        self
    }

    pub fn with_octave(mut self, octave: i64) -> Self {
        self.octave = octave;
        self
    }
}

impl Default for ChordParams {
    fn default() -> Self {
        Self::triad(scale(&ScaleParams::major()))
    }
}

/// Build the chord described by `params`.
///
/// Fails when `pre_voices` or `post_voices` is zero.
pub fn chord(params: &ChordParams) -> Result<PositionVector> {
    let selected = match &params.selection {
        Selection::Positions(indices) => {
            let indices = indices
                .rototranslate(0, params.pre_voices)
                .context("selecting chord positions")?;
            params
                .scale
                .rotated(params.degree)
                .select_from_position(&indices)
        }
        Selection::Intervals(steps) => {
            let steps = steps
                .rotate(0, params.pre_voices)
                .context("selecting chord intervals")?
                .with_offset(params.degree);
            select_from_interval(&params.scale, &steps)
        }
    };

    let mut out = selected
        .rototranslate(params.position, params.post_voices)
        .context("voicing chord")?
        .with_updated_span();
    if params.invert {
        out = out.invert();
    }
    if let Some(negative) = params.negative {
        out = out.negative(negative.position, negative.standard);
    }

    let shift = params.root + params.octave * params.scale.modulo();
    Ok(out + shift)
}

/// `target` with `position` set so that `chord` of it is the voicing of
/// `target` closest to `reference`.
///
/// The rotation is measured on `target` built at position 0, so it is an
/// absolute position rather than an offset from `target.position`.
pub fn auto_voicing_params(reference: &ChordParams, target: &ChordParams) -> Result<ChordParams> {
    let reference_chord = chord(reference)?;
    let target_chord = chord(&target.clone().with_position(0))?;

    let voicing = auto_voicing(&reference_chord, &target_chord)?;
    debug!(
        rotation = voicing.rotation,
        distance = voicing.distance,
        "voiced chord on degree {}",
        target.degree
    );

    Ok(target.clone().with_position(voicing.rotation))
}

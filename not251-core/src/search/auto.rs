//! Rotation-search optimizers.
//!
//! `auto_voicing` picks the rotation of a chord closest to a reference chord;
//! `auto_mode` picks the mode of an interval pattern that holds a note set.
//! Both generate a bounded candidate set, score it with the distance engine,
//! and keep the first candidate with minimal distance.

use crate::error::{Result, VectorError};
use crate::search::distance::{
    edit_distance, euclidean_distance_map, min_rotation, sort_by_distance, Candidate, Metric,
};
use crate::types::{
    contains_all, find_pitch_classes, scale_map, to_intervals, to_positions, IntervalVector,
    PositionVector,
};
use num_integer::Integer;
use tracing::{debug, trace};

/// Reserved rotation value historically used to report "no mode found".
pub const MODE_NOT_FOUND: i64 = -666;

/// Winning rotation of [`auto_voicing`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voicing {
    pub vector: PositionVector,
    pub rotation: i64,
    pub distance: f64,
}

/// Outcome of [`auto_mode`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeSearch {
    /// The best mode containing every note, anchored on the scale's own offset.
    Found {
        rotation: usize,
        vector: PositionVector,
    },
    /// No rotation holds the note set; `scale` is the unrotated scale.
    NotFound { scale: PositionVector },
}

impl ModeSearch {
    pub fn is_found(&self) -> bool {
        matches!(self, ModeSearch::Found { .. })
    }

    pub fn rotation(&self) -> Option<usize> {
        match self {
            ModeSearch::Found { rotation, .. } => Some(*rotation),
            ModeSearch::NotFound { .. } => None,
        }
    }

    /// Rotation as a plain integer, [`MODE_NOT_FOUND`] when nothing matched.
    pub fn rotation_or_sentinel(&self) -> i64 {
        self.rotation().map_or(MODE_NOT_FOUND, |r| r as i64)
    }

    /// The winning mode, or the unrotated scale.
    pub fn vector(&self) -> &PositionVector {
        match self {
            ModeSearch::Found { vector, .. } => vector,
            ModeSearch::NotFound { scale } => scale,
        }
    }
}

/// Find the rotation of `target` whose raw coordinates are closest to
/// `reference`.
///
/// Only the `2n` rotations around the [`min_rotation`] anchor are examined.
/// Spans are recomputed on copies; the inputs are left untouched.
pub fn auto_voicing(reference: &PositionVector, target: &PositionVector) -> Result<Voicing> {
    let reference = reference.clone().with_updated_span();
    let target = target.clone().with_updated_span();

    let center = min_rotation(&reference, &target)?;
    let n = target.len() as i64;

    let candidates: Vec<Candidate> = target
        .options(center)
        .into_iter()
        .zip((center - n)..)
        .map(|(option, rotation)| Candidate {
            rotation,
            data: option.into_data(),
        })
        .collect();
    debug!(center, candidates = candidates.len(), "auto_voicing window");

    let scored = sort_by_distance(euclidean_distance_map(
        candidates,
        reference.data(),
        Metric::Euclidean,
    ));
    for candidate in &scored {
        trace!(rotation = candidate.rotation, distance = candidate.distance, data = ?candidate.data);
    }

    let Some(best) = scored.into_iter().next() else {
        return Err(VectorError::Empty {
            operation: "auto_voicing",
        });
    };
    debug!(rotation = best.rotation, distance = best.distance, "auto_voicing winner");

    Ok(Voicing {
        vector: PositionVector::from_parts(best.data, target.modulo(), target.span()),
        rotation: best.rotation,
        distance: best.distance,
    })
}

/// Every rotation of `scale`, unfolded from offset zero.
pub fn modes(scale: &IntervalVector) -> Vec<(usize, PositionVector)> {
    (0..scale.len())
        .map(|r| (r, to_positions(&scale.rotated(r as i64).with_offset(0))))
        .collect()
}

/// Find the mode of `scale` that contains every note's pitch class and is
/// closest (Euclidean) to the unrotated scale.
///
/// Notes are read relative to `scale.offset()`. When no mode qualifies the
/// result is [`ModeSearch::NotFound`] carrying the unrotated scale.
pub fn auto_mode(scale: &IntervalVector, notes: &[i64]) -> ModeSearch {
    let root = scale.offset();
    let modulo = scale.modulo();
    let relative: Vec<i64> = notes.iter().map(|note| note - root).collect();

    let candidates: Vec<Candidate> = modes(scale)
        .into_iter()
        .filter(|(_, mode)| contains_all(mode.data(), modulo, &relative))
        .map(|(rotation, mode)| Candidate {
            rotation: rotation as i64,
            data: mode.into_data(),
        })
        .collect();

    if candidates.is_empty() {
        debug!(?notes, "auto_mode found no compatible mode");
        return ModeSearch::NotFound {
            scale: to_positions(scale),
        };
    }

    let unrotated = to_positions(&scale.clone().with_offset(0));
    let scored = sort_by_distance(euclidean_distance_map(
        candidates,
        unrotated.data(),
        Metric::Euclidean,
    ));
    let Some(best) = scored.into_iter().next() else {
        return ModeSearch::NotFound {
            scale: to_positions(scale),
        };
    };
    debug!(rotation = best.rotation, distance = best.distance, "auto_mode winner");

    let mode = PositionVector::from_parts(best.data, unrotated.modulo(), unrotated.span());
    let intervals = to_intervals(&mode).with_offset(root);

    ModeSearch::Found {
        rotation: best.rotation as usize,
        vector: to_positions(&intervals),
    }
}

/// Transposition `0..modulo` of `scale` whose pitch-class set holds every
/// note and sits closest (edit distance) to the scale's own data.
///
/// Ties resolve to the lowest transposition; `None` when nothing qualifies.
pub fn auto_root(scale: &PositionVector, notes: &[i64]) -> Option<i64> {
    let map = scale_map(scale.data(), scale.modulo());
    let found = find_pitch_classes(&map, scale.modulo(), notes);

    let mut best: Option<(i64, usize)> = None;
    for (shift, classes) in found {
        let distance = edit_distance(&classes, scale.data());
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((shift, distance));
        }
    }
    best.map(|(shift, _)| shift)
}

/// Greedy voice-by-voice matching of `target` onto `reference`.
///
/// Each reference voice takes the remaining target voice with the smallest
/// pitch-class difference (ties go to the closest absolute value), moved
/// into the octave nearest that voice. The result is sorted and carries the
/// reference's modulo with a recomputed span.
pub fn auto_voicing_p2p(reference: &PositionVector, target: &PositionVector) -> PositionVector {
    let modulo = target.modulo();
    let mut out = target.data().to_vec();

    for (i, &voice) in reference.data().iter().enumerate().take(out.len()) {
        let mut closest = i;
        let mut closest_diff = i64::MAX;

        for j in i..out.len() {
            let diff = (voice - out[j]).mod_floor(&modulo);
            let nearer = (voice - out[j]).abs() < (voice - out[closest]).abs();
            if diff < closest_diff || (diff == closest_diff && nearer) {
                closest_diff = diff;
                closest = j;
            }
        }
        out.swap(i, closest);

        out[i] += (voice - out[i]).div_floor(&modulo) * modulo;
        if (voice - (out[i] + modulo)).abs() < (voice - out[i]).abs() {
            out[i] += modulo;
        } else if (voice - (out[i] - modulo)).abs() < (voice - out[i]).abs() {
            out[i] -= modulo;
        }
    }

    out.sort_unstable();
    PositionVector::from_parts(out, reference.modulo(), reference.span()).with_updated_span()
}

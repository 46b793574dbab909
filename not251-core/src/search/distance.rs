//! Distance metrics and the rotation anchor used by the optimizers.

use crate::error::{Result, VectorError};
use crate::types::PositionVector;
use num_integer::Integer;

/// Euclidean distance over the first `min(len(v1), len(v2))` coordinates.
///
/// Unequal lengths are truncated, never padded.
pub fn euclidean_distance(v1: &[i64], v2: &[i64]) -> f64 {
    let sum: i64 = v1
        .iter()
        .zip(v2)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    (sum as f64).sqrt()
}

/// Euclidean distance between the outer voices (first and last values) only.
pub fn reduced_euclidean_distance(v1: &[i64], v2: &[i64]) -> f64 {
    euclidean_distance(&endpoints(v1), &endpoints(v2))
}

fn endpoints(v: &[i64]) -> Vec<i64> {
    match (v.first(), v.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

/// Levenshtein distance between two integer sequences.
pub fn edit_distance(v1: &[i64], v2: &[i64]) -> usize {
    let mut previous: Vec<usize> = (0..=v2.len()).collect();
    let mut current = vec![0; v2.len() + 1];

    for (i, a) in v1.iter().enumerate() {
        current[0] = i + 1;
        for (j, b) in v2.iter().enumerate() {
            current[j + 1] = if a == b {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[v2.len()]
}

/// Cyclic index into `target` whose value is the tightest lower bound of the
/// reference's minimum: `target.element(i) <= min < target.element(i + 1)`.
///
/// The walk starts from an octave estimate and steps one index at a time.
pub fn min_rotation(reference: &PositionVector, target: &PositionVector) -> Result<i64> {
    if reference.span() == 0 || target.span() == 0 {
        return Err(VectorError::ZeroSpan {
            operation: "min_rotation",
        });
    }

    let min_v = reference.data().iter().copied().min().unwrap_or_default();
    let octaves =
        min_v.div_floor(&reference.span()) - target.data()[0].div_floor(&target.span());
    let mut i = octaves * target.len() as i64;

    while target.element(i) <= min_v {
        i += 1;
    }
    while target.element(i) > min_v {
        i -= 1;
    }

    Ok(i)
}

/// A rotation candidate: its label and the rotated values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub rotation: i64,
    pub data: Vec<i64>,
}

/// A candidate with its distance to the reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    pub rotation: i64,
    pub data: Vec<i64>,
    pub distance: f64,
}

/// Which distance to score candidates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Euclidean,
    /// Outer voices only.
    Reduced,
}

impl Metric {
    pub fn distance(self, v1: &[i64], v2: &[i64]) -> f64 {
        match self {
            Metric::Euclidean => euclidean_distance(v1, v2),
            Metric::Reduced => reduced_euclidean_distance(v1, v2),
        }
    }
}

/// Score every candidate against `reference`, keeping generation order.
pub fn euclidean_distance_map(
    candidates: Vec<Candidate>,
    reference: &[i64],
    metric: Metric,
) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|candidate| ScoredCandidate {
            distance: metric.distance(reference, &candidate.data),
            rotation: candidate.rotation,
            data: candidate.data,
        })
        .collect()
}

/// Stable ascending sort by distance: equal distances keep generation order.
pub fn sort_by_distance(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triad(data: Vec<i64>) -> PositionVector {
        PositionVector::new(data, 12, 12).unwrap()
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(&[0, 4, 7], &[0, 4, 7]), 0.0);
        assert_eq!(euclidean_distance(&[0, 0], &[3, 4]), 5.0);
        // truncates to the shorter vector
        assert_eq!(euclidean_distance(&[0, 0, 100], &[3, 4]), 5.0);
        assert_eq!(euclidean_distance(&[], &[3, 4]), 0.0);
    }

    #[test]
    fn test_reduced_euclidean_distance() {
        assert_eq!(reduced_euclidean_distance(&[0, 50, 4], &[3, -20, 0]), 5.0);
        assert_eq!(reduced_euclidean_distance(&[2], &[5, 9]), (9.0f64 + 49.0).sqrt());
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance(&[0, 2, 4], &[0, 2, 4]), 0);
        assert_eq!(edit_distance(&[0, 2, 4], &[0, 3, 4]), 1);
        assert_eq!(edit_distance(&[0, 2, 4, 5], &[2, 4]), 2);
        assert_eq!(edit_distance(&[], &[1, 2, 3]), 3);
    }

    #[test]
    fn test_min_rotation() {
        let reference = triad(vec![0, 4, 7]);
        assert_eq!(min_rotation(&reference, &triad(vec![7, 11, 14])).unwrap(), -2);
        assert_eq!(min_rotation(&reference, &reference).unwrap(), 0);

        let high = triad(vec![60, 64, 67]);
        let target = triad(vec![2, 5, 9]);
        let i = min_rotation(&high, &target).unwrap();
        assert!(target.element(i) <= 60 && target.element(i + 1) > 60);
        assert_eq!(target.element(i), 57);
    }

    #[test]
    fn test_min_rotation_zero_span() {
        let reference = triad(vec![0, 4, 7]);
        let flat = triad(vec![0, 4, 7]).with_span(0);
        assert!(matches!(
            min_rotation(&reference, &flat),
            Err(VectorError::ZeroSpan { .. })
        ));
    }

    #[test]
    fn test_sort_by_distance_is_stable() {
        let candidates = vec![
            Candidate { rotation: -1, data: vec![2, 4] },
            Candidate { rotation: 0, data: vec![0, 6] },
            Candidate { rotation: 1, data: vec![0, 4] },
            Candidate { rotation: 2, data: vec![-2, 4] },
        ];
        let sorted = sort_by_distance(euclidean_distance_map(candidates, &[0, 4], Metric::Euclidean));

        let rotations: Vec<i64> = sorted.iter().map(|c| c.rotation).collect();
        assert_eq!(rotations, vec![1, -1, 0, 2]);
        assert!(sorted.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_reduced_metric_ranks_outer_voices() {
        let candidates = vec![
            Candidate { rotation: 0, data: vec![0, 10, 7] },
            Candidate { rotation: 1, data: vec![1, 4, 7] },
            Candidate { rotation: 2, data: vec![0, 5, 8] },
        ];
        let reference = [0, 4, 7];

        let reduced = sort_by_distance(euclidean_distance_map(
            candidates.clone(),
            &reference,
            Metric::Reduced,
        ));
        let rotations: Vec<i64> = reduced.iter().map(|c| c.rotation).collect();
        assert_eq!(rotations, vec![0, 1, 2]);
        assert_eq!(reduced[0].distance, 0.0);
        assert_eq!(reduced[1].distance, 1.0);
        assert_eq!(reduced[2].distance, 1.0);

        // the inner voice of rotation 0 only counts for the full metric
        let full = sort_by_distance(euclidean_distance_map(candidates, &reference, Metric::Euclidean));
        let rotations: Vec<i64> = full.iter().map(|c| c.rotation).collect();
        assert_eq!(rotations, vec![1, 2, 0]);
    }
}

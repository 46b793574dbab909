//! Conversions between the two vector representations.

use crate::error::{Result, VectorError};
use crate::types::{IntervalVector, PositionVector};

/// Unfold intervals into absolute positions starting at `offset`.
///
/// The resulting span is the sum of all intervals (one full period).
pub fn to_positions(intervals: &IntervalVector) -> PositionVector {
    let mut sum = intervals.offset();
    let data = intervals
        .data()
        .iter()
        .map(|&step| {
            let position = sum;
            sum += step;
            position
        })
        .collect();

    PositionVector::from_parts(data, intervals.modulo(), intervals.total())
}

/// Differences between consecutive cyclic elements.
///
/// The last interval closes the cycle through `element(n)`, so it includes
/// one span. The first position becomes the offset.
pub fn to_intervals(positions: &PositionVector) -> IntervalVector {
    let n = positions.len() as i64;
    let data = (0..n)
        .map(|i| positions.element(i + 1) - positions.element(i))
        .collect();

    IntervalVector::from_parts(data, positions.modulo(), positions.data()[0])
}

/// Pick positions at the running sum of `selector`'s intervals, starting
/// from `selector.offset()`, then recompute the span of the selection.
pub fn select_from_interval(
    positions: &PositionVector,
    selector: &IntervalVector,
) -> PositionVector {
    let mut index = selector.offset();
    let data = selector
        .data()
        .iter()
        .map(|&step| {
            let value = positions.element(index);
            index += step;
            value
        })
        .collect();

    PositionVector::from_parts(data, positions.modulo(), positions.span()).with_updated_span()
}

/// Map every pitch of `voicing` back to the cyclic index of `scale` holding it.
///
/// The voicing is read in ascending order. Fails with
/// [`VectorError::DegreeNotFound`] on the first pitch that is not a member of
/// the scale. The indices come back as a position vector whose modulo and
/// span both equal the scale's length.
pub fn inverse_select(voicing: &PositionVector, scale: &PositionVector) -> Result<PositionVector> {
    if scale.span() == 0 {
        return Err(VectorError::ZeroSpan {
            operation: "inverse_select",
        });
    }

    let mut pitches = voicing.data().to_vec();
    pitches.sort_unstable();

    let mut j = pitches[0].div_euclid(voicing.modulo());
    while scale.element(j) > pitches[0] {
        j -= 1;
    }

    let mut indices = Vec::with_capacity(pitches.len());
    for &pitch in &pitches {
        while scale.element(j) < pitch {
            j += 1;
        }
        if scale.element(j) != pitch {
            return Err(VectorError::DegreeNotFound { value: pitch });
        }
        indices.push(j);
    }

    let length = scale.len() as i64;
    Ok(PositionVector::from_parts(indices, length, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major_steps() -> IntervalVector {
        IntervalVector::new(vec![2, 2, 1, 2, 2, 2, 1], 12, 0).unwrap()
    }

    fn major() -> PositionVector {
        PositionVector::new(vec![0, 2, 4, 5, 7, 9, 11], 12, 12).unwrap()
    }

    #[test]
    fn test_to_positions() {
        let positions = to_positions(&major_steps());
        assert_eq!(positions.data(), &[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(positions.span(), 12);
        assert_eq!(positions.modulo(), 12);

        let d_major = to_positions(&major_steps().with_offset(2));
        assert_eq!(d_major.data(), &[2, 4, 6, 7, 9, 11, 13]);
        assert_eq!(d_major.span(), 12);
    }

    #[test]
    fn test_to_intervals_closes_cycle() {
        let intervals = to_intervals(&major());
        assert_eq!(intervals.data(), &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(intervals.offset(), 0);

        let chord = PositionVector::new(vec![60, 64, 67], 12, 12).unwrap();
        let stacked = to_intervals(&chord);
        assert_eq!(stacked.data(), &[4, 3, 5]);
        assert_eq!(stacked.offset(), 60);
    }

    #[test]
    fn test_round_trip() {
        let scale = major();
        assert_eq!(to_positions(&to_intervals(&scale)), scale);

        let voicing = PositionVector::new(vec![-1, 2, 7], 12, 12).unwrap();
        assert_eq!(to_positions(&to_intervals(&voicing)).data(), voicing.data());

        let steps = major_steps().with_offset(5);
        assert_eq!(to_intervals(&to_positions(&steps)), steps);
    }

    #[test]
    fn test_select_from_interval() {
        let thirds = IntervalVector::new(vec![2, 2, 2], 12, 0).unwrap();
        let tonic = select_from_interval(&major(), &thirds);
        assert_eq!(tonic.data(), &[0, 4, 7]);
        assert_eq!(tonic.span(), 12);

        let dominant = select_from_interval(&major(), &thirds.with_offset(4));
        assert_eq!(dominant.data(), &[7, 11, 14]);
        assert_eq!(dominant.span(), 12);
    }

    #[test]
    fn test_inverse_select() {
        let voicing = PositionVector::new(vec![67, 60, 64], 12, 12).unwrap();
        let indices = inverse_select(&voicing, &major()).unwrap();
        assert_eq!(indices.data(), &[35, 37, 39]);
        assert_eq!(indices.modulo(), 7);
        assert_eq!(indices.span(), 7);
        assert_eq!(major().select_from_position(&indices).data(), &[60, 64, 67]);
    }

    #[test]
    fn test_inverse_select_rejects_foreign_pitch() {
        let voicing = PositionVector::new(vec![60, 61], 12, 12).unwrap();
        assert_eq!(
            inverse_select(&voicing, &major()),
            Err(VectorError::DegreeNotFound { value: 61 })
        );
    }
}

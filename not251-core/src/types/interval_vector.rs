//! Relative cyclic vectors.
//!
//! An [`IntervalVector`] stores the deltas of one cycle of a periodic pattern
//! (a scale's step pattern, a chord's stacking). Indexing wraps with no span
//! term; `offset` is the anchor used when unfolding into positions.

use crate::error::{Result, VectorError};
#[cfg(feature = "colored")]
use colored::*;
use num_integer::Integer;
use std::fmt;

/// Interval deltas with an anchor `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawIntervalVector"))]
pub struct IntervalVector {
    data: Vec<i64>,
    modulo: i64,
    offset: i64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawIntervalVector {
    data: Vec<i64>,
    modulo: i64,
    offset: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIntervalVector> for IntervalVector {
    type Error = VectorError;

    fn try_from(raw: RawIntervalVector) -> Result<Self> {
        IntervalVector::new(raw.data, raw.modulo, raw.offset)
    }
}

impl IntervalVector {
    /// Create an interval vector. `data` must be non-empty and `modulo`
    /// strictly positive.
    pub fn new(data: Vec<i64>, modulo: i64, offset: i64) -> Result<Self> {
        if modulo <= 0 {
            return Err(VectorError::InvalidModulo(modulo));
        }
        if data.is_empty() {
            return Err(VectorError::Empty {
                operation: "IntervalVector::new",
            });
        }
        Ok(Self::from_parts(data, modulo, offset))
    }

    pub(crate) fn from_parts(data: Vec<i64>, modulo: i64, offset: i64) -> Self {
        debug_assert!(!data.is_empty());
        debug_assert!(modulo > 0);
        IntervalVector {
            data,
            modulo,
            offset,
        }
    }

    pub fn data(&self) -> &[i64] {
        &self.data
    }

    pub fn into_data(self) -> Vec<i64> {
        self.data
    }

    pub fn modulo(&self) -> i64 {
        self.modulo
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects empty data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replace the anchor offset.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn set_offset(&mut self, offset: i64) {
        self.offset = offset;
    }

    /// Sum of all deltas: the distance covered by one full cycle.
    pub fn total(&self) -> i64 {
        self.data.iter().sum()
    }

    /// Interval at cyclic index `i` (pure modular indexing).
    pub fn element(&self, i: i64) -> i64 {
        let n = self.data.len() as i64;
        self.data[i.mod_floor(&n) as usize]
    }

    /// `len` consecutive intervals starting at cyclic index `start`.
    pub fn rotate(&self, start: i64, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(VectorError::Empty {
                operation: "IntervalVector::rotate",
            });
        }
        Ok(self.window(start, len))
    }

    /// Rotation keeping the vector's own length.
    pub fn rotated(&self, start: i64) -> Self {
        self.window(start, self.data.len())
    }

    fn window(&self, start: i64, len: usize) -> Self {
        let data = (0..len as i64).map(|k| self.element(start + k)).collect();
        Self::from_parts(data, self.modulo, self.offset)
    }

    /// Reverse the order of the intervals.
    pub fn invert(&self) -> Self {
        let data = self.data.iter().rev().copied().collect();
        Self::from_parts(data, self.modulo, self.offset)
    }

    /// Reverse the intervals before `position` (`left`) or from `position`
    /// onward. `position` is taken modulo the length.
    pub fn single_mirror(&self, position: i64, left: bool) -> Self {
        let n = self.data.len() as i64;
        let position = position.mod_floor(&n) as usize;

        let mut data = self.data.clone();
        if left {
            data[..position].reverse();
        } else {
            data[position..].reverse();
        }
        Self::from_parts(data, self.modulo, self.offset)
    }

    /// Keep a transformation result: replace this vector's data with it.
    pub fn apply(&mut self, result: IntervalVector) {
        self.data = result.data;
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(feature = "colored")]
impl fmt::Display for IntervalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}> {}",
            join(&self.data).yellow(),
            format!("(mod {}, offset {})", self.modulo, self.offset).bright_black()
        )
    }
}

#[cfg(not(feature = "colored"))]
impl fmt::Display for IntervalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}> (mod {}, offset {})",
            join(&self.data),
            self.modulo,
            self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major_steps() -> IntervalVector {
        IntervalVector::new(vec![2, 2, 1, 2, 2, 2, 1], 12, 0).unwrap()
    }

    #[test]
    fn test_element_has_no_octave_term() {
        let steps = major_steps();
        assert_eq!(steps.element(2), 1);
        assert_eq!(steps.element(9), 1);
        assert_eq!(steps.element(-1), 1);
        assert_eq!(steps.element(-5), 1);
        assert_eq!(steps.total(), 12);
    }

    #[test]
    fn test_rotate() {
        let steps = major_steps();
        assert_eq!(steps.rotated(1).data(), &[2, 1, 2, 2, 2, 1, 2]);
        assert_eq!(steps.rotated(-1).data(), &[1, 2, 2, 1, 2, 2, 2]);
        assert_eq!(steps.rotate(2, 3).unwrap().data(), &[1, 2, 2]);
        assert!(steps.rotate(0, 0).is_err());

        let thirds = IntervalVector::new(vec![2], 12, 0).unwrap();
        assert_eq!(thirds.rotate(0, 3).unwrap().data(), &[2, 2, 2]);
    }

    #[test]
    fn test_invert_reverses() {
        let steps = major_steps();
        assert_eq!(steps.invert().data(), &[1, 2, 2, 2, 1, 2, 2]);
        assert_eq!(steps.invert().invert(), steps);
    }

    #[test]
    fn test_single_mirror() {
        let v = IntervalVector::new(vec![1, 2, 3, 4, 5], 12, 0).unwrap();
        assert_eq!(v.single_mirror(3, true).data(), &[3, 2, 1, 4, 5]);
        assert_eq!(v.single_mirror(2, false).data(), &[1, 2, 5, 4, 3]);
        // position wraps: 5 -> 0
        assert_eq!(v.single_mirror(5, true).data(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.single_mirror(5, false).data(), &[5, 4, 3, 2, 1]);
        assert_eq!(v.data(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_apply_and_offset() {
        let mut steps = major_steps().with_offset(2);
        assert_eq!(steps.offset(), 2);
        let rotated = steps.rotated(5);
        steps.apply(rotated);
        assert_eq!(steps.data(), &[2, 1, 2, 2, 1, 2, 2]);
        assert_eq!(steps.offset(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let empty = serde_json::from_str::<IntervalVector>(r#"{"data":[],"modulo":12,"offset":0}"#);
        assert!(empty.is_err());

        let zero = serde_json::from_str::<IntervalVector>(r#"{"data":[2,2,1],"modulo":0,"offset":0}"#);
        assert!(zero.is_err());

        let steps = major_steps().with_offset(3);
        let json = serde_json::to_string(&steps).unwrap();
        assert_eq!(serde_json::from_str::<IntervalVector>(&json).unwrap(), steps);
    }
}

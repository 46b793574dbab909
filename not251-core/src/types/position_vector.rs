//! Absolute cyclic vectors.
//!
//! A [`PositionVector`] holds absolute positions (pitches, steps) and extends
//! them into an infinite sequence: indexing past the end wraps around and adds
//! one `span` per full cycle, indexing before the start subtracts it.

use crate::error::{Result, VectorError};
#[cfg(feature = "colored")]
use colored::*;
use num_integer::Integer;
use std::fmt;
use std::ops::{Add, Sub};

/// Absolute positions, cyclic through `span`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPositionVector"))]
pub struct PositionVector {
    data: Vec<i64>,
    modulo: i64,
    span: i64,
}

/// Unchecked wire form; deserialization goes through [`PositionVector::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPositionVector {
    data: Vec<i64>,
    modulo: i64,
    span: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPositionVector> for PositionVector {
    type Error = VectorError;

    fn try_from(raw: RawPositionVector) -> Result<Self> {
        PositionVector::new(raw.data, raw.modulo, raw.span)
    }
}

/// Axis used by [`PositionVector::free_invert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InversionAxis {
    /// Reflect every value around the first element.
    First,
    /// Reverse the order of the values.
    #[default]
    Median,
    /// Reflect every value around the last element.
    Last,
}

impl PositionVector {
    /// Create a vector from explicit data, modulo and span.
    ///
    /// `data` must be non-empty and `modulo` strictly positive.
    pub fn new(data: Vec<i64>, modulo: i64, span: i64) -> Result<Self> {
        if modulo <= 0 {
            return Err(VectorError::InvalidModulo(modulo));
        }
        if data.is_empty() {
            return Err(VectorError::Empty {
                operation: "PositionVector::new",
            });
        }
        Ok(Self::from_parts(data, modulo, span))
    }

    /// Build without validation. Callers guarantee non-empty data and a
    /// positive modulo.
    pub(crate) fn from_parts(data: Vec<i64>, modulo: i64, span: i64) -> Self {
        debug_assert!(!data.is_empty());
        debug_assert!(modulo > 0);
        PositionVector { data, modulo, span }
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

    pub fn span(&self) -> i64 {
        self.span
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects empty data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replace the span, keeping data and modulo.
    pub fn with_span(mut self, span: i64) -> Self {
        self.span = span;
        self
    }

    /// Value at cyclic index `i`.
    ///
    /// Indices past the end add `|span|` per completed cycle; negative
    /// indices subtract it, so `element(-1)` is the last value one span down.
    pub fn element(&self, i: i64) -> i64 {
        let n = self.data.len() as i64;
        let octave = if i >= 0 { i / n } else { (i + 1) / n - 1 };
        self.data[i.mod_floor(&n) as usize] + self.span.abs() * octave
    }

    /// Window of `len` consecutive values starting at cyclic index `start`.
    pub fn rototranslate(&self, start: i64, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(VectorError::Empty {
                operation: "PositionVector::rototranslate",
            });
        }
        Ok(self.window(start, len))
    }

    /// Window of the vector's own length starting at `start`.
    pub fn rotated(&self, start: i64) -> Self {
        self.window(start, self.data.len())
    }

    fn window(&self, start: i64, len: usize) -> Self {
        let data = (0..len as i64).map(|k| self.element(start + k)).collect();
        Self::from_parts(data, self.modulo, self.span)
    }

    /// Keep a transformation result: replace this vector's data with it.
    pub fn apply(&mut self, result: PositionVector) {
        self.data = result.data;
    }

    /// Recompute `span` as the smallest multiple of `modulo` strictly greater
    /// than `max(data) - min(data)`.
    pub fn span_update(&mut self) {
        let (min, max) = self
            .data
            .iter()
            .fold((self.data[0], self.data[0]), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let diff = max - min;

        let mut span = self.modulo;
        while span <= diff {
            span += self.modulo;
        }
        self.span = span;
    }

    /// Consuming form of [`span_update`](Self::span_update).
    pub fn with_updated_span(mut self) -> Self {
        self.span_update();
        self
    }

    /// Negate every value.
    pub fn invert(&self) -> Self {
        let data = self.data.iter().map(|v| -v).collect();
        Self::from_parts(data, self.modulo, self.span)
    }

    /// Negative-harmony reflection around `position`.
    ///
    /// With `standard` the axis sits half a step below `position`
    /// (`2 * position - 1` on a doubled grid). The reflected values are
    /// sorted ascending and then rototranslated by -1.
    pub fn negative(&self, position: i64, standard: bool) -> Self {
        let (scale, axis) = if standard {
            (2, position * 2 - 1)
        } else {
            (1, position)
        };

        let mut data: Vec<i64> = self
            .data
            .iter()
            .map(|v| (axis - (v * scale - axis)) / scale)
            .collect();
        data.sort_unstable();

        Self::from_parts(data, self.modulo, self.span).rotated(-1)
    }

    /// The `2n` candidate windows `rototranslate(i, n)` for `i` in
    /// `[center - n, center + n)`, in that order.
    pub fn options(&self, center: i64) -> Vec<PositionVector> {
        let n = self.data.len();
        let n_i = n as i64;
        ((center - n_i)..(center + n_i))
            .map(|i| self.window(i, n))
            .collect()
    }

    /// Pick `element(index)` for every index held by `indices`, then
    /// recompute the span of the selection.
    pub fn select_from_position(&self, indices: &PositionVector) -> Self {
        let data = indices.data.iter().map(|&i| self.element(i)).collect();
        Self::from_parts(data, self.modulo, self.span).with_updated_span()
    }

    /// Reflect around the first or last element, or reverse the order.
    pub fn free_invert(&self, axis: InversionAxis) -> Self {
        let data = match axis {
            InversionAxis::First => {
                let pivot = self.data[0];
                self.data.iter().map(|v| 2 * pivot - v).collect()
            }
            InversionAxis::Last => {
                let pivot = self.data[self.data.len() - 1];
                self.data.iter().map(|v| 2 * pivot - v).collect()
            }
            InversionAxis::Median => self.data.iter().rev().copied().collect(),
        };
        Self::from_parts(data, self.modulo, self.span)
    }

    /// Add `amount` to every value.
    pub fn transpose(&self, amount: i64) -> Self {
        let data = self.data.iter().map(|v| v + amount).collect();
        Self::from_parts(data, self.modulo, self.span)
    }

    /// Pitch classes (values reduced into `[0, modulo)`), in data order.
    pub fn pitch_classes(&self) -> Vec<i64> {
        self.data.iter().map(|v| v.mod_floor(&self.modulo)).collect()
    }

    /// Move the first value to 0 and fold the rest into `[0, modulo)`
    /// relative to it. The result is sorted with a recomputed span.
    pub fn to_zero(&self) -> Self {
        let root = self.data[0];
        let mut data: Vec<i64> = self
            .data
            .iter()
            .map(|v| (v - root).mod_floor(&self.modulo))
            .collect();
        data.sort_unstable();
        Self::from_parts(data, self.modulo, self.span).with_updated_span()
    }
}

impl Add<i64> for PositionVector {
    type Output = PositionVector;

    fn add(self, amount: i64) -> Self::Output {
        self.transpose(amount)
    }
}

impl Sub<i64> for PositionVector {
    type Output = PositionVector;

    fn sub(self, amount: i64) -> Self::Output {
        self.transpose(-amount)
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(feature = "colored")]
impl fmt::Display for PositionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            join(&self.data).cyan(),
            format!("(mod {}, span {})", self.modulo, self.span).bright_black()
        )
    }
}

#[cfg(not(feature = "colored"))]
impl fmt::Display for PositionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] (mod {}, span {})",
            join(&self.data),
            self.modulo,
            self.span
        )
    }
}

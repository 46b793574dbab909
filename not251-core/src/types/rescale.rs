//! Bring two vectors with different moduli onto a common grid.
//!
//! Both vectors are scaled to the least common multiple of their moduli, so a
//! 12-step and a 24-step vector can be compared value by value.

use crate::types::{IntervalVector, PositionVector};
use num_integer::Integer;

/// Rescale data, modulo and span of both vectors to `lcm(a.modulo, b.modulo)`.
/// Identity when the moduli already match.
pub fn lcm_position(a: &PositionVector, b: &PositionVector) -> (PositionVector, PositionVector) {
    if a.modulo() == b.modulo() {
        return (a.clone(), b.clone());
    }
    let common = a.modulo().lcm(&b.modulo());
    (scale_position(a, common), scale_position(b, common))
}

/// Rescale data, modulo and offset of both vectors to `lcm(a.modulo, b.modulo)`.
/// Identity when the moduli already match.
pub fn lcm_interval(a: &IntervalVector, b: &IntervalVector) -> (IntervalVector, IntervalVector) {
    if a.modulo() == b.modulo() {
        return (a.clone(), b.clone());
    }
    let common = a.modulo().lcm(&b.modulo());
    (scale_interval(a, common), scale_interval(b, common))
}

fn scale_position(v: &PositionVector, common: i64) -> PositionVector {
    let factor = common / v.modulo();
    let data = v.data().iter().map(|x| x * factor).collect();
    PositionVector::from_parts(data, common, v.span() * factor)
}

fn scale_interval(v: &IntervalVector, common: i64) -> IntervalVector {
    let factor = common / v.modulo();
    let data = v.data().iter().map(|x| x * factor).collect();
    IntervalVector::from_parts(data, common, v.offset() * factor)
}

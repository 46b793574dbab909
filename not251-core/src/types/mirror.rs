//! Segment reflections over plain sequences.
//!
//! These work on any ordered data, typically interval patterns or melodic
//! lines.

/// Reverse `data[..position]` and `data[position..]` independently.
/// Positions past the end leave the input untouched.
pub fn double_mirror(data: &[i64], position: usize) -> Vec<i64> {
    let mut out = data.to_vec();
    if position > out.len() {
        return out;
    }
    out[..position].reverse();
    out[position..].reverse();
    out
}

/// Copy one side of `position` onto the other in mirrored order.
///
/// With `left`, the first `position` values are written backwards onto the
/// tail. Otherwise the tail from `position` is written backwards onto the
/// head. A left position past the end reverses the whole sequence; a
/// right one copies nothing.
pub fn mirror_onto(data: &[i64], position: usize, left: bool) -> Vec<i64> {
    let n = data.len();
    let mut out = data.to_vec();

    if left {
        for i in 0..position.min(n) {
            out[n - 1 - i] = data[i];
        }
    } else {
        for i in position..n {
            out[i - position] = data[n - 1 - (i - position)];
        }
    }
    out
}

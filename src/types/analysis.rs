//! Degree lookup, quantization and scale-to-scale transposition.

use not251_core::PositionVector;
use num_integer::Integer;

/// Index of `note`'s pitch class in `scale`, if present.
pub fn degree_detect(note: i64, scale: &[i64], modulo: i64) -> Option<usize> {
    let class = note.mod_floor(&modulo);
    scale.iter().position(|&v| v == class)
}

pub fn degree_detect_all(notes: &[i64], scale: &[i64], modulo: i64) -> Vec<Option<usize>> {
    notes
        .iter()
        .map(|&note| degree_detect(note, scale, modulo))
        .collect()
}

/// Snap `note` onto an ascending `scale`.
///
/// Returns the nearest scale value below (`prefer_lower`) or above the note;
/// falls back to the other side at either end of the scale.
pub fn quantize(note: i64, scale: &[i64], prefer_lower: bool) -> Option<i64> {
    let lower = scale.iter().copied().filter(|&v| v <= note).last();
    let upper = scale.iter().copied().find(|&v| v >= note);

    match (lower, upper) {
        (Some(lower), Some(upper)) => Some(if prefer_lower { lower } else { upper }),
        (lower, upper) => lower.or(upper),
    }
}

/// Degrees read on the input scale and the notes they map to on the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transposition {
    pub degrees: Vec<usize>,
    pub notes: Vec<i64>,
}

/// Move `notes` from `input` (rooted on `in_root`) to the same degrees of
/// `output` (rooted on `out_root`), keeping each note's octave.
///
/// Notes outside the input scale are quantized downward. When that makes two
/// different consecutive notes land on the same output note, the second one is
/// quantized upward instead. Notes that cannot be placed are skipped.
pub fn transpose_between(
    input: &PositionVector,
    output: &PositionVector,
    in_root: i64,
    out_root: i64,
    notes: &[i64],
) -> Transposition {
    let modulo = input.modulo();
    let in_scale = input.data();
    let out_scale = output.data();
    let locate = |class: i64| in_scale.iter().position(|&v| v == class);

    let mut result = Transposition::default();
    for (i, &note) in notes.iter().enumerate() {
        let class = (note - in_root).mod_floor(&modulo);
        let octave = (note - in_root).div_floor(&modulo);
        let place = |degree: usize| out_scale[degree % out_scale.len()] + out_root + octave * modulo;

        let Some(mut degree) = locate(class)
            .or_else(|| quantize(class, in_scale, true).and_then(locate))
        else {
            continue;
        };
        let mut out_note = place(degree);

        let repeated = result.notes.last() == Some(&out_note);
        if repeated && i > 0 && notes[i - 1] != note {
            if let Some(upper) = quantize(class, in_scale, false).and_then(locate) {
                degree = upper;
                out_note = place(degree);
            }
        }

        result.degrees.push(degree);
        result.notes.push(out_note);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAJOR: [i64; 7] = [0, 2, 4, 5, 7, 9, 11];

    fn pv(data: &[i64]) -> PositionVector {
        PositionVector::new(data.to_vec(), 12, 12).unwrap()
    }

    #[test]
    fn test_degree_detect() {
        assert_eq!(degree_detect(64, &MAJOR, 12), Some(2));
        assert_eq!(degree_detect(-1, &MAJOR, 12), Some(6));
        assert_eq!(degree_detect(61, &MAJOR, 12), None);
        assert_eq!(
            degree_detect_all(&[60, 61, 71], &MAJOR, 12),
            vec![Some(0), None, Some(6)]
        );
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(3, &MAJOR, true), Some(2));
        assert_eq!(quantize(3, &MAJOR, false), Some(4));
        assert_eq!(quantize(4, &MAJOR, false), Some(4));
        assert_eq!(quantize(-3, &MAJOR, true), Some(0));
        assert_eq!(quantize(20, &MAJOR, false), Some(11));
        assert_eq!(quantize(3, &[], true), None);
    }

    #[test]
    fn test_transpose_major_to_minor() {
        let minor = pv(&[0, 2, 3, 5, 7, 8, 10]);
        let moved = transpose_between(&pv(&MAJOR), &minor, 0, 0, &[60, 64, 67]);
        assert_eq!(moved.degrees, vec![0, 2, 4]);
        assert_eq!(moved.notes, vec![60, 63, 67]);

        let to_d = transpose_between(&pv(&MAJOR), &pv(&MAJOR), 0, 2, &[48, 59]);
        assert_eq!(to_d.notes, vec![50, 61]);
    }

    #[test]
    fn test_transpose_splits_collisions() {
        let moved = transpose_between(&pv(&MAJOR), &pv(&MAJOR), 0, 0, &[60, 61]);
        assert_eq!(moved.degrees, vec![0, 1]);
        assert_eq!(moved.notes, vec![60, 62]);

        // a repeated note keeps its placement
        let same = transpose_between(&pv(&MAJOR), &pv(&MAJOR), 0, 0, &[61, 61]);
        assert_eq!(same.notes, vec![60, 60]);
    }
}

//! Pitch-class set helpers shared by the root and mode searches.

use num_integer::Integer;
use std::collections::BTreeMap;

/// Every transposition `0..modulo` of `scale`, reduced to pitch classes and
/// sorted ascending, keyed by the transposition amount.
pub fn scale_map(scale: &[i64], modulo: i64) -> BTreeMap<i64, Vec<i64>> {
    (0..modulo)
        .map(|shift| {
            let mut classes: Vec<i64> = scale
                .iter()
                .map(|v| (v + shift).mod_floor(&modulo))
                .collect();
            classes.sort_unstable();
            (shift, classes)
        })
        .collect()
}

/// Keep the rows of `map` that contain the pitch class of every note.
pub fn find_pitch_classes(
    map: &BTreeMap<i64, Vec<i64>>,
    modulo: i64,
    notes: &[i64],
) -> BTreeMap<i64, Vec<i64>> {
    map.iter()
        .filter(|(_, classes)| contains_all(classes, modulo, notes))
        .map(|(&shift, classes)| (shift, classes.clone()))
        .collect()
}

/// True when the pitch-class set of `set` covers the pitch class of every note.
pub fn contains_all(set: &[i64], modulo: i64, notes: &[i64]) -> bool {
    notes.iter().all(|note| {
        let class = note.mod_floor(&modulo);
        set.iter().any(|v| v.mod_floor(&modulo) == class)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAJOR: [i64; 7] = [0, 2, 4, 5, 7, 9, 11];

    #[test]
    fn test_scale_map() {
        let map = scale_map(&MAJOR, 12);
        assert_eq!(map.len(), 12);
        assert_eq!(map[&0], MAJOR.to_vec());
        assert_eq!(map[&2], vec![1, 2, 4, 6, 7, 9, 11]);
    }

    #[test]
    fn test_find_pitch_classes() {
        let map = scale_map(&MAJOR, 12);
        // F# and C#: the major keys with at least two sharps, plus Db
        let found = find_pitch_classes(&map, 12, &[6, 13]);
        assert_eq!(
            found.keys().copied().collect::<Vec<_>>(),
            vec![1, 2, 4, 6, 9, 11]
        );
    }

    #[test]
    fn test_contains_all_negative_notes() {
        assert!(contains_all(&MAJOR, 12, &[-1, 24]));
        assert!(!contains_all(&MAJOR, 12, &[-2]));
        assert!(contains_all(&MAJOR, 12, &[]));
    }
}

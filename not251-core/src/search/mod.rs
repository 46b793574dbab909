// not251-core/src/search/mod.rs

pub mod auto;
pub mod distance;

pub use auto::{
    auto_mode, auto_root, auto_voicing, auto_voicing_p2p, modes, ModeSearch, Voicing,
    MODE_NOT_FOUND,
};
pub use distance::{
    edit_distance, euclidean_distance, euclidean_distance_map, min_rotation,
    reduced_euclidean_distance, sort_by_distance, Candidate, Metric, ScoredCandidate,
};

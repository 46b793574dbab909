// not251-core/src/types/mod.rs

pub mod cross;
pub mod interval_vector;
pub mod mirror;
pub mod pitch_class;
pub mod position_vector;
pub mod rescale;

pub use cross::{inverse_select, select_from_interval, to_intervals, to_positions};
pub use interval_vector::IntervalVector;
pub use mirror::{double_mirror, mirror_onto};
pub use pitch_class::{contains_all, find_pitch_classes, scale_map};
pub use position_vector::{InversionAxis, PositionVector};
pub use rescale::{lcm_interval, lcm_position};

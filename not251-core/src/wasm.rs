//! WASM bindings for not251-core
//!
//! The plain result builders are always compiled so they can be tested
//! natively; the `#[wasm_bindgen]` exports wrap them behind the `wasm`
//! feature.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::search::{auto_mode, auto_voicing};
use crate::types::{IntervalVector, PositionVector};

/// Flattened [`crate::search::Voicing`] for JavaScript callers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoicingResult {
    pub data: Vec<i64>,
    pub rotation: i64,
    pub distance: f64,
}

/// Flattened [`crate::search::ModeSearch`] for JavaScript callers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeResult {
    pub found: bool,
    pub rotation: i64,
    pub data: Vec<i64>,
}

fn widen(values: &[i32]) -> Vec<i64> {
    values.iter().map(|&v| v as i64).collect()
}

/// Voice `target` against `reference`, both taken with `span = modulo`.
/// `None` when either chord is empty or the modulo is not positive.
pub fn voicing_result(reference: &[i32], target: &[i32], modulo: i32) -> Option<VoicingResult> {
    let modulo = modulo as i64;
    let reference = PositionVector::new(widen(reference), modulo, modulo).ok()?;
    let target = PositionVector::new(widen(target), modulo, modulo).ok()?;

    let voicing = auto_voicing(&reference, &target).ok()?;
    Some(VoicingResult {
        data: voicing.vector.into_data(),
        rotation: voicing.rotation,
        distance: voicing.distance,
    })
}

/// Best mode of the interval pattern for `notes`. A missing mode is
/// reported with `found: false` and the sentinel rotation.
pub fn mode_result(intervals: &[i32], offset: i32, modulo: i32, notes: &[i32]) -> Option<ModeResult> {
    let scale = IntervalVector::new(widen(intervals), modulo as i64, offset as i64).ok()?;
    let search = auto_mode(&scale, &widen(notes));

    Some(ModeResult {
        found: search.is_found(),
        rotation: search.rotation_or_sentinel(),
        data: search.vector().data().to_vec(),
    })
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn auto_voicing_js(reference: &[i32], target: &[i32], modulo: i32) -> JsValue {
    match voicing_result(reference, target, modulo) {
        Some(result) => serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn auto_mode_js(intervals: &[i32], offset: i32, modulo: i32, notes: &[i32]) -> JsValue {
    match mode_result(intervals, offset, modulo, notes) {
        Some(result) => serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

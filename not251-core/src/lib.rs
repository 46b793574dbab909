//! # not251 Core
//!
//! WASM-compatible core library for the not251 music-theory algebra.
//! Provides the cyclic vector types, conversions between them, and the
//! distance-driven rotation searches, with no I/O.
//!
//! ## Features
//!
//! - **serde**: Enable serialization of the vector and result types
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//! - **colored**: Enable colored terminal output (disabled in WASM)
//!
//! ## Example
//!
//! ```
//! use not251_core::{auto_voicing, PositionVector};
//!
//! let tonic = PositionVector::new(vec![0, 4, 7], 12, 12)?;
//! let dominant = PositionVector::new(vec![7, 11, 14], 12, 12)?;
//! let voicing = auto_voicing(&tonic, &dominant)?;
//! assert_eq!(voicing.vector.data(), &[-1, 2, 7]);
//! # Ok::<(), not251_core::VectorError>(())
//! ```

pub mod error;
pub mod search;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use error::{Result, VectorError};
pub use search::{auto_mode, auto_root, auto_voicing, auto_voicing_p2p, ModeSearch, Voicing};
pub use types::{IntervalVector, InversionAxis, PositionVector};

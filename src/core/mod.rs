//! Core module re-exports.
//!
//! The error taxonomy and path helpers live in `roster-core`.
//! They are re-exported here so the rest of the crate has one import path.

pub use roster_core::core::*;
pub use roster_core::*;

//! Core utilities for Roster
//!
//! Holds the fetch error taxonomy shared by every fetch path, the
//! application error type, and platform path helpers.

pub mod core;

pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
pub use crate::core::{FetchError, FetchResult, RosterError, RosterResult};

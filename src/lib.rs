//! Roster: fetch and list user records
//!
//! This crate provides a pluggable fetch service for a JSON list of users.
//! One service interface is offered through three calling conventions
//! (awaitable, callback and stream) and is backed by either the network or a
//! bundled fixture, selected through dependency injection.

pub use roster_core::{format_error_with_help, ErrorHelp, FetchError, FetchResult, RosterError, RosterResult};

/// Core module re-exported from roster-core.
pub mod core;

/// Configuration management.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// Fetch services and calling conventions.
pub mod fetch;

/// Payload types.
pub mod model;

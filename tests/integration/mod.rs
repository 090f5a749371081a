//! Integration tests module
//!
//! This module contains integration tests for the roster CLI commands.

pub mod common;
pub mod config;
pub mod list;

pub mod config;
pub mod list;

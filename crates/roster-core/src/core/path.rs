use crate::core::error::{RosterError, RosterResult};
use std::path::{Path, PathBuf};

/// Conventional file name of the user fixture.
pub const FIXTURE_FILE_NAME: &str = "users.json";

/// Get the Roster home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\roster
/// - Linux: ~/.config/roster
/// - macOS: ~/Library/Application Support/roster
pub fn roster_home() -> RosterResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| RosterError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("roster"))
}

/// Get the config file path
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\roster\config.yaml
/// - Linux: ~/.config/roster/config.yaml
/// - macOS: ~/Library/Application Support/roster/config.yaml
pub fn config_file() -> RosterResult<PathBuf> {
    Ok(roster_home()?.join("config.yaml"))
}

/// Get the conventionally named fixture inside `dir`
pub fn fixture_in(dir: &Path) -> PathBuf {
    dir.join(FIXTURE_FILE_NAME)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> RosterResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

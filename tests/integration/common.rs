//! Common utilities for integration tests

use std::path::Path;
use std::process::Command;

/// A `roster` command whose config directory lives under `home`
///
/// Keeps tests away from the real user config and from env overrides.
pub fn roster_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roster"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("ROSTER_USERS_URL")
        .env_remove("ROSTER_SOURCE")
        .env_remove("RUST_LOG");
    cmd
}

pub const ONE_USER: &str =
    r#"[{"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"}]"#;

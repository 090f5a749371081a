//! User-facing help text for errors

use crate::core::error::{FetchError, RosterError};

/// Suggestion attached to an error when shown to a user
pub trait ErrorHelp {
    /// A short hint on what to try next, if there is one
    fn help(&self) -> Option<&'static str>;
}

impl ErrorHelp for FetchError {
    fn help(&self) -> Option<&'static str> {
        match self {
            FetchError::InvalidLocator => {
                Some("Check the URL: only absolute http:// and https:// locators are supported.")
            }
            FetchError::TransportFailure(_) => Some(
                "Check your network connection, or run with --bundled to use the offline fixture.",
            ),
            FetchError::InvalidStatus(code) if *code >= 500 => {
                Some("The server reported an internal error. Try again later.")
            }
            FetchError::InvalidStatus(404) => Some("The resource was not found. Check the URL path."),
            FetchError::InvalidStatus(_) => None,
            FetchError::EmptyPayload => Some("The source returned no data."),
            FetchError::DecodingFailure(_) => Some(
                "The payload does not look like a list of users (id, name, username, email).",
            ),
        }
    }
}

impl ErrorHelp for RosterError {
    fn help(&self) -> Option<&'static str> {
        match self {
            RosterError::Fetch(err) => err.help(),
            RosterError::Yaml(_) | RosterError::Config(_) => {
                Some("Fix or remove the config file; `roster config path` shows where it lives.")
            }
            RosterError::Io(_) | RosterError::Json(_) | RosterError::Path(_) => None,
        }
    }
}

/// Format an error with its suggestion, if any
pub fn format_error_with_help(error: &RosterError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n  Help: {}", error, help),
        None => format!("Error: {}", error),
    }
}

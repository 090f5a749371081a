//! Validation steps shared by every fetch service and calling convention

use crate::core::{FetchError, FetchResult};
use serde::de::DeserializeOwned;
use std::error::Error as StdError;

/// Accept only statuses in `[200, 300)`
pub(crate) fn check_status(status: u16) -> FetchResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::InvalidStatus(status))
    }
}

/// Reject empty payloads, then decode the bytes structurally into `T`
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> FetchResult<T> {
    if bytes.is_empty() {
        return Err(FetchError::EmptyPayload);
    }

    serde_json::from_slice(bytes).map_err(|e| FetchError::DecodingFailure(e.to_string()))
}

/// Render an error together with its source chain
pub(crate) fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // reqwest repeats the inner message in some of its wrappers
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

pub type RosterResult<T> = Result<T, RosterError>;

/// Failure kinds produced by every fetch path.
///
/// The set is closed: network, fixture and every calling convention map
/// their failures onto one of these variants. All kinds are terminal; retry
/// policy belongs to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The resource locator could not be parsed or resolved.
    #[error("The endpoint URL is invalid")]
    InvalidLocator,

    /// The transport failed before any response or bytes were obtained.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// A response arrived with a status outside `[200, 300)`.
    /// Carries `0` when a response existed but its status could not be read.
    #[error("The API failed to issue a valid response (status {0})")]
    InvalidStatus(u16),

    /// A successful response carried no bytes.
    #[error("The data provided appears to be empty")]
    EmptyPayload,

    /// Bytes were obtained but did not match the expected schema.
    #[error("Failed to decode payload: {0}")]
    DecodingFailure(String),
}

impl FetchError {
    /// Observed status code, only for `InvalidStatus`.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::InvalidStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Diagnostic string carried from the underlying cause, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            FetchError::TransportFailure(msg) | FetchError::DecodingFailure(msg) => Some(msg),
            _ => None,
        }
    }

    /// Stable snake_case name of the kind, for logs and machine output.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidLocator => "invalid_locator",
            FetchError::TransportFailure(_) => "transport_failure",
            FetchError::InvalidStatus(_) => "invalid_status",
            FetchError::EmptyPayload => "empty_payload",
            FetchError::DecodingFailure(_) => "decoding_failure",
        }
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

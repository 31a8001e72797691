//! Error types for s5-core
//!
//! Every shell operation reports failures through this one enum. The shell loop
//! renders any variant as a message and keeps running; only startup maps errors
//! to a process exit code.

use thiserror::Error;

/// Result type alias for s5-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s5 operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed credentials or settings file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Location syntax that cannot be navigated to
    #[error("Invalid location: {0}")]
    Navigation(String),

    /// Input rejected before any remote call (e.g. a bad bucket name)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrong number of arguments for a recognized command
    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    /// Failure returned by the object storage service
    #[error("Remote operation failed: {0}")]
    Remote(String),

    /// Local file or remote resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication or permission failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Local command exited unsuccessfully or could not be started
    #[error("Local command failed: {0}")]
    LocalCommand(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::Navigation(_)
            | Error::Validation(_)
            | Error::MalformedCommand(_)
            | Error::TomlParse(_)
            | Error::InvalidUrl(_) => 2, // UsageError
            Error::Remote(_) => 3,       // NetworkError
            Error::Auth(_) => 4,         // AuthError
            _ => 1,                      // GeneralError
        }
    }
}

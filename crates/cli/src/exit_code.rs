//! Exit code definitions for s5
//!
//! The shell itself never exits on a command failure. These codes only
//! distinguish a clean quit from a startup that never reached the prompt.

use s5_core::Error;

/// Exit codes for the s5 process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Shell quit normally
    Success = 0,

    /// General/unspecified error
    GeneralError = 1,

    /// Missing or malformed credentials or settings
    UsageError = 2,

    /// Could not reach the storage service at startup
    NetworkError = 3,

    /// Credentials rejected at startup
    AuthError = 4,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::UsageError),
            3 => Some(Self::NetworkError),
            4 => Some(Self::AuthError),
            _ => None,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        Self::from_i32(err.exit_code()).unwrap_or(Self::GeneralError)
    }
}

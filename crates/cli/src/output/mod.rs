//! Output formatting utilities
//!
//! Everything the shell prints to its console goes through the formatter.
//! Directory uploads also get a progress bar on stderr.

mod formatter;
mod progress;

pub use formatter::Formatter;
pub use progress::ProgressBar;

/// Output configuration derived from flags and settings
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Disable colored output
    pub no_color: bool,
    /// Disable progress bar
    pub no_progress: bool,
}

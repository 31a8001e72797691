//! Console formatter for the shell
//!
//! Writes listings, confirmations, errors and the prompt to whatever writer the
//! shell loop owns, so the same rendering runs against stdout and test buffers.

use std::io::{self, Write};

use console::style;
use s5_core::{Error, Location};

use super::OutputConfig;

/// Prompt prefix shown before the current location
pub const PROMPT_PREFIX: &str = "S5";

/// Formatter for shell output
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        !self.config.no_color
    }

    /// Print a line of text
    pub fn println<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{message}")
    }

    /// Print each line as-is
    pub fn lines<W: Write>(&self, out: &mut W, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Output a success message
    pub fn success<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.colors_enabled() {
            writeln!(out, "{} {message}", style("✓").green())
        } else {
            writeln!(out, "✓ {message}")
        }
    }

    /// Output an error
    pub fn error<W: Write>(&self, out: &mut W, err: &Error) -> io::Result<()> {
        if self.colors_enabled() {
            writeln!(out, "{} {err}", style("✗").red())
        } else {
            writeln!(out, "✗ {err}")
        }
    }

    /// Write the prompt for `location` and flush so it shows before input
    pub fn prompt<W: Write>(&self, out: &mut W, location: &Location) -> io::Result<()> {
        write!(out, "{PROMPT_PREFIX}{location}> ")?;
        out.flush()
    }
}

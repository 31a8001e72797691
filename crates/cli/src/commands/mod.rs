//! Shell command routing
//!
//! Each input line is classified by its first token into one of the shell's
//! commands. Anything unrecognized is handed to the local operating system.
//! The router only classifies; each handler checks its own arguments.

pub mod chlocn;
pub mod cp;
pub mod local;
pub mod ls;
pub mod mb;

#[cfg(test)]
pub(crate) mod testing;

use s5_core::{Error, Result};

/// A classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quit` or `exit`
    Quit,
    /// `create_bucket /<name>`
    CreateBucket(Vec<String>),
    /// `chlocn <path|..|../..|/>`
    ChangeLocation(Vec<String>),
    /// `list [path]`
    ListContents(Vec<String>),
    /// `locs3cp <local> <bucket>/<key-prefix>`
    CopyToCloud(Vec<String>),
    /// Any other line, run by the local system
    LocalPassthrough(String),
}

/// Classify an input line
///
/// Command keywords are matched case-insensitively against the whole first
/// token, so `LIST /` is a listing while `listing` runs locally.
pub fn route(line: &str) -> Command {
    let line = line.trim();
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Command::LocalPassthrough(String::new());
    };
    let args: Vec<String> = tokens.map(str::to_string).collect();

    match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "create_bucket" => Command::CreateBucket(args),
        "chlocn" => Command::ChangeLocation(args),
        "list" => Command::ListContents(args),
        "locs3cp" => Command::CopyToCloud(args),
        _ => Command::LocalPassthrough(line.to_string()),
    }
}

/// What a successful command has to show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Lines printed verbatim
    pub lines: Vec<String>,
    /// Closing confirmation, printed after the lines
    pub success: Option<String>,
}

impl Outcome {
    /// Nothing to print besides the next prompt
    pub fn quiet() -> Self {
        Self::default()
    }

    /// A listing, one entry per line
    pub fn listing(lines: Vec<String>) -> Self {
        Self {
            lines,
            success: None,
        }
    }

    /// A single confirmation message
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            success: Some(message.into()),
        }
    }
}

/// Check the argument count of a command
pub(crate) fn expect_args<'a>(
    args: &'a [String],
    range: std::ops::RangeInclusive<usize>,
    usage: &str,
) -> Result<&'a [String]> {
    if range.contains(&args.len()) {
        Ok(args)
    } else {
        Err(Error::MalformedCommand(format!("usage: {usage}")))
    }
}

//! Shell location model
//!
//! The shell's current position is a sequence of segments: the first is the
//! bucket name and the rest form the object-key prefix. A location renders as
//! `/` at the root or `/bucket/dir/sub` below it, never with a trailing slash.
//!
//! Moving up past the root saturates at `/` instead of failing.

use crate::error::{Error, Result};

/// A position in the bucket/key namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    /// The root location, above every bucket
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path such as `/bucket/dir`
    ///
    /// Empty segments and `.` are dropped, `..` removes the preceding segment.
    pub fn parse(path: &str) -> Result<Self> {
        if !path.starts_with('/') {
            return Err(invalid_format(path));
        }

        let mut segments: Vec<String> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other.to_string()),
            }
        }

        Ok(Self { segments })
    }

    /// Whether this is the root location
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Bucket name and key prefix, or `None` at the root
    ///
    /// The prefix is the remaining segments joined with `/` and is empty for a
    /// bucket-level location.
    pub fn bucket_and_prefix(&self) -> Option<(&str, String)> {
        let (bucket, rest) = self.segments.split_first()?;
        Some((bucket.as_str(), rest.join("/")))
    }

    /// Location `levels` segments above this one, saturating at the root
    pub fn ancestor(&self, levels: usize) -> Self {
        let keep = self.segments.len().saturating_sub(levels);
        Self {
            segments: self.segments[..keep].to_vec(),
        }
    }

    /// Compute the location a navigation target refers to, without moving
    ///
    /// Accepts `/`, `..`, `../..`, or an absolute path. Anything else is a
    /// navigation error.
    pub fn resolve(&self, target: &str) -> Result<Self> {
        match target {
            "/" => Ok(Self::root()),
            ".." => Ok(self.ancestor(1)),
            "../.." => Ok(self.ancestor(2)),
            _ => Self::parse(target),
        }
    }

    /// Move to `target` and return the new location
    pub fn navigate(&mut self, target: &str) -> Result<Self> {
        *self = self.resolve(target)?;
        Ok(self.clone())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

fn invalid_format(target: &str) -> Error {
    Error::Navigation(format!(
        "'{target}' is not a valid location. Use '/', '..', '../..' or an absolute path like /bucket/dir"
    ))
}

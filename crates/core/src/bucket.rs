//! Bucket name validation
//!
//! `create_bucket` takes its argument in location form (`/name`). Names are
//! checked here before anything is sent to the service.

use crate::error::{Error, Result};

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 63;

/// Validate a `/name` argument and return the bare bucket name
pub fn parse_bucket_name(arg: &str) -> Result<&str> {
    let Some(name) = arg.strip_prefix('/') else {
        return Err(Error::Validation(format!(
            "bucket name '{arg}' must start with '/'"
        )));
    };

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(Error::Validation(format!(
            "bucket name '{name}' must not contain uppercase letters"
        )));
    }

    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '.'))
    {
        return Err(Error::Validation(format!(
            "bucket name '{name}' contains '{c}'; only lowercase letters, digits, '-' and '.' are allowed"
        )));
    }

    if name.len() < MIN_LEN || name.len() > MAX_LEN {
        return Err(Error::Validation(format!(
            "bucket name must be between {MIN_LEN} and {MAX_LEN} characters"
        )));
    }

    Ok(name)
}

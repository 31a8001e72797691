//! Credentials file loading
//!
//! `S5-S3.conf` uses the AWS shared credentials format:
//!
//! ```text
//! [default]
//! aws_access_key_id = AKIA...
//! aws_secret_access_key = ...
//! ```
//!
//! Parsing is delegated to the SDK's profile file loader; only the `[default]`
//! profile is read.

use std::path::Path;

use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use aws_types::os_shim_internal::{Env, Fs};

use s5_core::{Credentials, Error, Result};

const PROFILE: &str = "default";
const ACCESS_KEY_ID: &str = "aws_access_key_id";
const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";

/// Read credentials from a file on disk
pub async fn load_credentials(path: &Path) -> Result<Credentials> {
    if !path.exists() {
        return Err(Error::Config(format!(
            "credentials file not found: {}",
            path.display()
        )));
    }

    let files = EnvConfigFiles::builder()
        .with_file(EnvConfigFileKind::Credentials, path)
        .build();
    let credentials = from_files(&files).await?;
    tracing::debug!(
        path = %path.display(),
        access_key_id = %credentials.access_key_id,
        "Loaded credentials"
    );
    Ok(credentials)
}

/// Parse the contents of a credentials file
pub async fn parse_credentials(content: &str) -> Result<Credentials> {
    let files = EnvConfigFiles::builder()
        .with_contents(EnvConfigFileKind::Credentials, content)
        .build();
    from_files(&files).await
}

async fn from_files(files: &EnvConfigFiles) -> Result<Credentials> {
    let profiles = aws_config::profile::load(&Fs::real(), &Env::real(), files, None)
        .await
        .map_err(|e| Error::Config(format!("invalid credentials file: {e}")))?;

    let profile = profiles
        .get_profile(PROFILE)
        .ok_or_else(|| Error::Config(format!("missing [{PROFILE}] section")))?;

    Ok(Credentials {
        access_key_id: required(profile.get(ACCESS_KEY_ID), ACCESS_KEY_ID)?,
        secret_access_key: required(profile.get(SECRET_ACCESS_KEY), SECRET_ACCESS_KEY)?,
    })
}

fn required(value: Option<&str>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::Config(format!("missing '{key}' in [{PROFILE}] section"))),
    }
}

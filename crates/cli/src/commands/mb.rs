//! create_bucket command - Make bucket
//!
//! Creates a new bucket in the configured region. The name is validated and
//! checked against existing buckets before the creation request is sent.

use s5_core::{Error, ObjectStore, Result, parse_bucket_name};

use super::{Outcome, expect_args};

const USAGE: &str = "create_bucket /<name>";

/// Execute the create_bucket command
pub async fn execute(args: &[String], store: &dyn ObjectStore, region: &str) -> Result<Outcome> {
    let args = expect_args(args, 1..=1, USAGE)?;
    let name = parse_bucket_name(&args[0]).map_err(creation_failed)?;

    let existing = store.list_buckets().await?;
    if existing.iter().any(|b| b.eq_ignore_ascii_case(name)) {
        let reason = format!("bucket name '{name}' already exists");
        return Err(creation_failed(Error::Validation(reason)));
    }

    store.create_bucket(name, region).await?;
    tracing::info!(bucket = name, region, "Bucket created");

    let message = format!("Bucket '{name}' created in {region}.");
    Ok(Outcome::success(message))
}

fn creation_failed(err: Error) -> Error {
    match err {
        Error::Validation(reason) => Error::Validation(format!("cannot create bucket: {reason}")),
        other => other,
    }
}

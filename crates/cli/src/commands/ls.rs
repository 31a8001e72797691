//! list command - List buckets and objects
//!
//! Lists buckets at the root, or the keys one level below a bucket/prefix
//! location. Without an argument the current location is listed.

use s5_core::{Location, ObjectStore, Result};

use super::{Outcome, expect_args};

const USAGE: &str = "list [/|..|../..|/bucket[/prefix]]";

/// Execute the list command
pub async fn execute(
    args: &[String],
    store: &dyn ObjectStore,
    location: &Location,
) -> Result<Outcome> {
    let args = expect_args(args, 0..=1, USAGE)?;
    let target = match args.first() {
        Some(target) => location.resolve(target)?,
        None => location.clone(),
    };

    match target.bucket_and_prefix() {
        None => list_buckets(store).await,
        Some((bucket, prefix)) => list_objects(store, &target, bucket, &prefix).await,
    }
}

async fn list_buckets(store: &dyn ObjectStore) -> Result<Outcome> {
    let buckets = store.list_buckets().await?;
    tracing::debug!(count = buckets.len(), "Listed buckets");

    if buckets.is_empty() {
        return Ok(Outcome::listing(vec!["No buckets found.".to_string()]));
    }
    Ok(Outcome::listing(buckets))
}

async fn list_objects(
    store: &dyn ObjectStore,
    target: &Location,
    bucket: &str,
    prefix: &str,
) -> Result<Outcome> {
    let keys = store.list_objects(bucket, prefix).await?;

    if keys.is_empty() {
        return Ok(Outcome::listing(vec![format!("No objects found in {target}.")]));
    }
    Ok(Outcome::listing(keys))
}

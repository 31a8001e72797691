//! chlocn command - Change location
//!
//! Moves the shell to another bucket or prefix. Non-root targets must exist
//! remotely; the location only changes once that check passes.

use s5_core::{Error, Location, ObjectStore, Result};

use super::{Outcome, expect_args};

const USAGE: &str = "chlocn </|..|../..|/bucket[/prefix]>";

/// Execute the chlocn command
pub async fn execute(
    args: &[String],
    store: &dyn ObjectStore,
    location: &mut Location,
) -> Result<Outcome> {
    let args = expect_args(args, 1..=1, USAGE)?;
    let target = location.resolve(&args[0])?;

    let exists = match target.bucket_and_prefix() {
        None => true,
        Some((bucket, prefix)) if prefix.is_empty() => store.bucket_exists(bucket).await?,
        Some((bucket, prefix)) => store.object_or_prefix_exists(bucket, &prefix).await?,
    };

    if !exists {
        let reason = format!("directory {target} does not exist");
        return Err(Error::NotFound(reason));
    }

    tracing::debug!(from = %location, to = %target, "Changed location");
    *location = target;
    Ok(Outcome::quiet())
}

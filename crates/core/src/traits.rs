//! ObjectStore trait definition
//!
//! This trait defines the storage operations the shell needs. It keeps the
//! command handlers decoupled from the S3 SDK so they can run against a mock.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for S3-compatible storage operations
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Names of all buckets in the account
    async fn list_buckets(&self) -> Result<Vec<String>>;

    /// Keys one level below `prefix` in `bucket`
    ///
    /// Common prefixes (ending in `/`) come first, then object keys.
    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;

    /// Check if a bucket exists
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Create a bucket constrained to `region`
    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;

    /// Upload a local file to `bucket/key`
    async fn upload_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()>;

    /// Whether `prefix` names an object or has any object beneath it
    async fn object_or_prefix_exists(&self, bucket: &str, prefix: &str) -> Result<bool>;
}

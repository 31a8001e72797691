//! Mock object store for handler tests

use std::path::Path;

use async_trait::async_trait;
use mockall::mock;
use s5_core::{ObjectStore, Result};

mock! {
    pub Store {}

    #[async_trait]
    impl ObjectStore for Store {
        async fn list_buckets(&self) -> Result<Vec<String>>;
        async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;
        async fn bucket_exists(&self, bucket: &str) -> Result<bool>;
        async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;
        async fn upload_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()>;
        async fn object_or_prefix_exists(&self, bucket: &str, prefix: &str) -> Result<bool>;
    }
}

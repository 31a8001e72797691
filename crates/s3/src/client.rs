//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s5-core.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use s5_core::{Config, Credentials, Error, ObjectStore, Result};

/// Region in which S3 rejects an explicit location constraint
const US_EAST_1: &str = "us-east-1";

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from static credentials and shell settings
    pub async fn new(credentials: Credentials, config: &Config) -> Result<Self> {
        let provider = aws_credential_types::Credentials::new(
            credentials.access_key_id,
            credentials.secret_access_key,
            None, // session token
            None, // expiry
            "s5-static-credentials",
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(provider)
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        // Custom endpoints are S3-compatible servers, which expect path-style addressing
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        tracing::debug!(region = %config.region, endpoint = ?config.endpoint, "Created S3 client");

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_buckets(&self) -> Result<Vec<String>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(classify)?;

        Ok(response
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_string))
            .collect())
    }

    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        let prefix = dir_prefix(prefix);
        let mut listing = Listing::new(&prefix);
        let mut continuation_token: Option<String> = None;

        loop {
            let mut request = self
                .inner
                .list_objects_v2()
                .bucket(bucket)
                .delimiter("/");

            if !prefix.is_empty() {
                request = request.prefix(&prefix);
            }

            if let Some(token) = &continuation_token {
                request = request.continuation_token(token);
            }

            let response = request.send().await.map_err(classify)?;
            listing.add_page(&response);

            continuation_token = next_page_token(&response);
            if continuation_token.is_none() {
                break;
            }
        }

        tracing::debug!(
            bucket,
            prefix = %prefix,
            dirs = listing.dirs.len(),
            keys = listing.keys.len(),
            "Listed objects"
        );

        Ok(listing.into_entries())
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.inner.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                if e.as_service_error().is_some_and(|se| se.is_not_found()) {
                    Ok(false)
                } else {
                    Err(classify(e))
                }
            }
        }
    }

    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()> {
        let mut request = self.inner.create_bucket().bucket(bucket);

        if region != US_EAST_1 {
            let configuration = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build();
            request = request.create_bucket_configuration(configuration);
        }

        request.send().await.map_err(classify)?;
        tracing::info!(bucket, region, "Created bucket");

        Ok(())
    }

    async fn upload_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        let data = tokio::fs::read(local_path).await?;
        let size = data.len();

        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data));

        if let Some(mime) = mime_guess::from_path(local_path).first() {
            request = request.content_type(mime.essence_str());
        }

        request.send().await.map_err(classify)?;
        tracing::debug!(bucket, key, size, "Uploaded object");

        Ok(())
    }

    async fn object_or_prefix_exists(&self, bucket: &str, prefix: &str) -> Result<bool> {
        let key = prefix.trim_matches('/');
        if key.is_empty() {
            return self.bucket_exists(bucket).await;
        }

        let response = self
            .inner
            .list_objects_v2()
            .bucket(bucket)
            .prefix(format!("{key}/"))
            .max_keys(1)
            .send()
            .await
            .map_err(classify)?;

        if response.key_count().unwrap_or(0) > 0 || !response.contents().is_empty() {
            return Ok(true);
        }

        match self.inner.head_object().bucket(bucket).key(key).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                if e.as_service_error().is_some_and(|se| se.is_not_found()) {
                    Ok(false)
                } else {
                    Err(classify(e))
                }
            }
        }
    }
}

/// Prefix with a trailing `/` so listing groups at the next level
/// Entries collected across the pages of one delimited listing
struct Listing<'a> {
    prefix: &'a str,
    dirs: Vec<String>,
    keys: Vec<String>,
}

impl<'a> Listing<'a> {
    fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            dirs: Vec::new(),
            keys: Vec::new(),
        }
    }

    fn add_page(&mut self, page: &ListObjectsV2Output) {
        let prefix = self.prefix;
        self.dirs.extend(
            page.common_prefixes()
                .iter()
                .filter_map(|p| p.prefix().map(str::to_string)),
        );
        self.keys.extend(
            page.contents()
                .iter()
                .filter_map(|o| o.key())
                // The prefix placeholder object itself is not a child
                .filter(|k| *k != prefix)
                .map(str::to_string),
        );
    }

    /// Directories first, then keys, each in service order
    fn into_entries(mut self) -> Vec<String> {
        self.dirs.append(&mut self.keys);
        self.dirs
    }
}

/// Token for the next page, or `None` once the listing is complete
fn next_page_token(page: &ListObjectsV2Output) -> Option<String> {
    if page.is_truncated().unwrap_or(false) {
        page.next_continuation_token().map(str::to_string)
    } else {
        None
    }
}

fn dir_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

/// Map an SDK failure onto the shell's error kinds
fn classify(err: impl std::error::Error) -> Error {
    let message = DisplayErrorContext(&err).to_string();

    if message.contains("AccessDenied")
        || message.contains("InvalidAccessKeyId")
        || message.contains("SignatureDoesNotMatch")
    {
        Error::Auth(message)
    } else if message.contains("BucketAlreadyExists") || message.contains("BucketAlreadyOwnedByYou")
    {
        Error::Conflict(message)
    } else if message.contains("NoSuchBucket")
        || message.contains("NoSuchKey")
        || message.contains("NotFound")
    {
        Error::NotFound(message)
    } else {
        Error::Remote(message)
    }
}

//! s5-core: Core library for the S5 object storage shell
//!
//! This crate provides the SDK-independent parts of the shell:
//! - Settings and credentials loading
//! - The location model and bucket name rules
//! - ObjectStore trait for S3 operations
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing the command handlers to be tested against mocks.

pub mod bucket;
pub mod config;
pub mod credentials;
pub mod error;
pub mod location;
pub mod traits;

pub use bucket::parse_bucket_name;
pub use config::{Config, ConfigManager};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use location::Location;
pub use traits::ObjectStore;

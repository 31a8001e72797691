//! Integration tests for the s5 binary
//!
//! These tests require a running S3-compatible server.
//!
//! Run with:
//! ```bash
//! # Start an S3-compatible server
//! docker run -d --name s5-minio -p 9000:9000 \
//!     -e MINIO_ROOT_USER=accesskey \
//!     -e MINIO_ROOT_PASSWORD=secretkey \
//!     minio/minio server /data
//!
//! # Run tests
//! TEST_S3_ENDPOINT=http://localhost:9000 \
//! TEST_S3_ACCESS_KEY=accesskey TEST_S3_SECRET_KEY=secretkey \
//!     cargo test --features integration
//! ```

#![cfg(feature = "integration")]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Get the path to the s5 binary
fn s5_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_s5"))
}

/// Get S3 test configuration from environment
fn get_test_config() -> Option<(String, String, String)> {
    let endpoint = std::env::var("TEST_S3_ENDPOINT").ok()?;
    let access_key = std::env::var("TEST_S3_ACCESS_KEY").ok()?;
    let secret_key = std::env::var("TEST_S3_SECRET_KEY").ok()?;
    Some((endpoint, access_key, secret_key))
}

/// Write credentials and settings files pointing at the test server
fn setup() -> Option<TempDir> {
    let (endpoint, access_key, secret_key) = get_test_config()?;
    let dir = tempfile::tempdir().ok()?;

    std::fs::write(
        dir.path().join("S5-S3.conf"),
        format!(
            "[default]\naws_access_key_id = {access_key}\naws_secret_access_key = {secret_key}\n"
        ),
    )
    .ok()?;
    std::fs::write(
        dir.path().join("config.toml"),
        format!("region = \"us-east-1\"\nendpoint = \"{endpoint}\"\n"),
    )
    .ok()?;

    Some(dir)
}

/// Run s5 in `dir`, feeding `script` on stdin
fn run_s5(dir: &Path, script: &str) -> Output {
    let mut child = Command::new(s5_binary())
        .args(["--no-color", "--no-progress", "--config"])
        .arg(dir.join("config.toml"))
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start s5");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    child.wait_with_output().expect("Failed to wait for s5")
}

fn unique_bucket(name: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("s5-{name}-{nanos}")
}

#[test]
fn test_refuses_to_start_without_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_s5(dir.path(), "list /\nquit\n");

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("You could not be connected to your S3 storage"));
    assert!(!stdout.contains("S5/>"));
}

#[test]
fn test_create_list_and_upload() {
    let Some(dir) = setup() else {
        eprintln!("Skipping: TEST_S3_* not set");
        return;
    };

    let bucket = unique_bucket("upload");
    std::fs::create_dir_all(dir.path().join("data/nested")).unwrap();
    std::fs::write(dir.path().join("data/one.txt"), "one").unwrap();
    std::fs::write(dir.path().join("data/nested/two.txt"), "two").unwrap();

    let script = format!(
        "create_bucket /{bucket}\n\
         list /\n\
         locs3cp data {bucket}/backup\n\
         chlocn /{bucket}/backup\n\
         list\n\
         chlocn /{bucket}/backup/nested\n\
         list\n\
         quit\n"
    );
    let output = run_s5(dir.path(), &script);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("You are now connected to your S3 storage"));
    assert!(stdout.contains(&format!("Bucket '{bucket}' created")));
    assert!(stdout.contains(&format!("\n{bucket}\n")));
    assert!(stdout.contains("Uploaded 2 file(s)"));
    assert!(stdout.contains("backup/nested/\nbackup/one.txt\n"));
    assert!(stdout.contains("backup/nested/two.txt\n"));
    assert!(stdout.contains(&format!("S5/{bucket}/backup/nested> ")));
}

#[test]
fn test_duplicate_bucket_rejected() {
    let Some(dir) = setup() else {
        eprintln!("Skipping: TEST_S3_* not set");
        return;
    };

    let bucket = unique_bucket("dup");
    let script = format!("create_bucket /{bucket}\ncreate_bucket /{bucket}\nquit\n");
    let output = run_s5(dir.path(), &script);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("already exists"));
}

#[test]
fn test_missing_directory_keeps_location() {
    let Some(dir) = setup() else {
        eprintln!("Skipping: TEST_S3_* not set");
        return;
    };

    let bucket = unique_bucket("nav");
    let script = format!("create_bucket /{bucket}\nchlocn /{bucket}/nothing-here\nquit\n");
    let output = run_s5(dir.path(), &script);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("does not exist"));
    assert!(!stdout.contains("nothing-here>"));
}

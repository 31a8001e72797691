//! locs3cp command - Copy local files to S3
//!
//! Uploads a single file, or every file beneath a directory with its relative
//! path kept under the destination prefix. The first failed upload stops the
//! copy; files already uploaded stay in place.

use std::path::{Path, PathBuf};

use s5_core::{Error, ObjectStore, Result};

use super::{Outcome, expect_args};
use crate::output::{OutputConfig, ProgressBar};

const USAGE: &str = "locs3cp <local-path> <bucket>/<key-prefix>";

/// Execute the locs3cp command
pub async fn execute(
    args: &[String],
    store: &dyn ObjectStore,
    output_config: &OutputConfig,
) -> Result<Outcome> {
    let args = expect_args(args, 2..=2, USAGE)?;
    let src = Path::new(&args[0]);

    if !src.exists() {
        return Err(Error::NotFound(format!(
            "local file not found: {}",
            src.display()
        )));
    }

    let (bucket, prefix) = parse_destination(&args[1])?;

    if src.is_dir() {
        upload_directory(store, src, bucket, prefix, output_config).await
    } else {
        let key = file_key(src, prefix);
        let size = upload_one(store, src, bucket, &key).await?;
        Ok(Outcome {
            lines: vec![transfer_line(src, bucket, &key)],
            success: Some(summary(1, size)),
        })
    }
}

async fn upload_directory(
    store: &dyn ObjectStore,
    src: &Path,
    bucket: &str,
    prefix: &str,
    output_config: &OutputConfig,
) -> Result<Outcome> {
    let files = walk_dir(src, src)?;
    let progress = ProgressBar::new(output_config, files.len() as u64);

    let mut lines = Vec::with_capacity(files.len());
    let mut total_size = 0;

    for (file_path, relative_path) in &files {
        let key = join_key(prefix, relative_path);
        progress.set_message(relative_path);

        match upload_one(store, file_path, bucket, &key).await {
            Ok(size) => total_size += size,
            Err(e) => {
                progress.abandon();
                tracing::warn!(file = %file_path.display(), uploaded = lines.len(), "Copy aborted");
                return Err(e);
            }
        }

        progress.inc();
        lines.push(transfer_line(file_path, bucket, &key));
    }

    progress.finish();

    Ok(Outcome {
        lines,
        success: Some(summary(files.len(), total_size)),
    })
}

async fn upload_one(store: &dyn ObjectStore, src: &Path, bucket: &str, key: &str) -> Result<u64> {
    let size = std::fs::metadata(src)?.len();
    store.upload_file(src, bucket, key).await?;
    tracing::debug!(file = %src.display(), bucket, key, size, "Uploaded file");
    Ok(size)
}

/// Split `bucket/key-prefix` (optionally with a leading `/`)
fn parse_destination(destination: &str) -> Result<(&str, &str)> {
    let destination = destination.strip_prefix('/').unwrap_or(destination);
    let (bucket, prefix) = destination.split_once('/').unwrap_or((destination, ""));

    if bucket.is_empty() {
        return Err(Error::Validation(format!(
            "remote destination '{destination}' has no bucket. Expected: <bucket>/<key-prefix>"
        )));
    }

    Ok((bucket, prefix))
}

/// Key for a single file: the prefix itself, or the file name under a directory-like prefix
fn file_key(src: &Path, prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        let filename = src.file_name().unwrap_or_default().to_string_lossy();
        format!("{prefix}{filename}")
    } else {
        prefix.to_string()
    }
}

fn join_key(prefix: &str, relative_path: &str) -> String {
    let relative_path = relative_path.replace('\\', "/");
    if prefix.is_empty() {
        relative_path
    } else if prefix.ends_with('/') {
        format!("{prefix}{relative_path}")
    } else {
        format!("{prefix}/{relative_path}")
    }
}

/// Every file beneath `dir`, paired with its path relative to `base`
fn walk_dir(dir: &Path, base: &Path) -> std::io::Result<Vec<(PathBuf, String)>> {
    let mut files = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    for path in entries {
        if path.is_file() {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let relative_str = relative.to_string_lossy().to_string();
            files.push((path, relative_str));
        } else if path.is_dir() {
            files.extend(walk_dir(&path, base)?);
        }
    }
    Ok(files)
}

fn transfer_line(src: &Path, bucket: &str, key: &str) -> String {
    format!("{} -> {bucket}/{key}", src.display())
}

fn summary(count: usize, size: u64) -> String {
    format!(
        "Uploaded {count} file(s) ({}).",
        humansize::format_size(size, humansize::BINARY)
    )
}

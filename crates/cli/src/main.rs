//! s5 - AWS S3 Storage Shell
//!
//! An interactive shell for browsing and managing S3 buckets alongside the
//! local filesystem.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use s5_shell::cli::{Cli, execute};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with shell output
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = execute(cli).await;

    std::process::exit(exit_code.as_i32());
}

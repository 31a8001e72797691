//! Process entry: flags, startup connection, and the interactive session
//!
//! Startup loads settings and credentials, builds the S3 client and probes it
//! with a bucket listing. The prompt is only shown once that probe succeeds.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use s5_core::credentials::DEFAULT_CREDENTIALS_FILE;
use s5_core::{Config, ConfigManager, ObjectStore as _, Result};
use s5_s3::{S3Client, load_credentials};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};
use crate::shell::Shell;

const BANNER: &str = "Welcome to the AWS S3 Storage Shell (S5)";

/// s5 - interactive shell for S3 object storage
///
/// Browse buckets with `list`, move around with `chlocn`, create buckets with
/// `create_bucket` and upload with `locs3cp`. Other lines run locally.
#[derive(Parser, Debug)]
#[command(name = "s5")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Credentials file with a [default] section
    #[arg(long, env = "S5_CREDENTIALS", default_value = DEFAULT_CREDENTIALS_FILE)]
    pub credentials: PathBuf,

    /// Settings file (defaults to ~/.config/s5/config.toml)
    #[arg(long, env = "S5_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Disable progress bar
    #[arg(long, default_value = "false")]
    pub no_progress: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

/// Connect and run the shell on stdin/stdout, returning the process exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let (config, client) = match connect(&cli).await {
        Ok(connected) => connected,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            let formatter = Formatter::new(output_config(&cli, None));
            if let Err(io_err) = print_failure(&formatter, &mut out, &e) {
                tracing::warn!(error = %io_err, "Could not write startup failure");
            }
            return ExitCode::from(&e);
        }
    };

    let output_config = output_config(&cli, Some(&config));
    let formatter = Formatter::new(output_config.clone());
    if let Err(e) = print_welcome(&formatter, &mut out) {
        tracing::warn!(error = %e, "Could not write welcome banner");
    }

    let mut shell = Shell::new(client, config.region, output_config);
    match shell.run(std::io::stdin().lock(), &mut out).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Console I/O failed");
            ExitCode::GeneralError
        }
    }
}

async fn connect(cli: &Cli) -> Result<(Config, S3Client)> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new()?,
    };
    let config = manager.load()?;
    let credentials = load_credentials(&cli.credentials).await?;

    let client = S3Client::new(credentials, &config).await?;
    let buckets = client.list_buckets().await?;
    tracing::info!(region = %config.region, buckets = buckets.len(), "Connected");

    Ok((config, client))
}

fn output_config(cli: &Cli, config: Option<&Config>) -> OutputConfig {
    let defaults = config.map(|c| c.defaults.clone()).unwrap_or_default();
    OutputConfig {
        no_color: cli.no_color || !defaults.color,
        no_progress: cli.no_progress || !defaults.progress,
    }
}

fn print_welcome<W: Write>(formatter: &Formatter, out: &mut W) -> std::io::Result<()> {
    formatter.println(out, BANNER)?;
    formatter.println(out, "You are now connected to your S3 storage")
}

fn print_failure<W: Write>(
    formatter: &Formatter,
    out: &mut W,
    err: &s5_core::Error,
) -> std::io::Result<()> {
    formatter.println(out, BANNER)?;
    formatter.println(out, "You could not be connected to your S3 storage")?;
    formatter.error(out, err)?;
    formatter.println(
        out,
        "Please review procedures for authenticating your account on AWS S3",
    )
}

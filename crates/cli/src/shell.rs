//! Read-eval loop
//!
//! The loop owns the shell state (storage client, current location, region).
//! Each line is routed, run to completion, and rendered before the next prompt.
//! Command failures are printed and the loop continues; only `quit`, `exit` or
//! end of input stop it.

use std::io::{self, BufRead, Write};

use s5_core::{Location, ObjectStore, Result};

use crate::commands::{self, Command, Outcome};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Interactive shell session
pub struct Shell<S: ObjectStore> {
    store: S,
    location: Location,
    region: String,
    output_config: OutputConfig,
    formatter: Formatter,
}

impl<S: ObjectStore> Shell<S> {
    /// Start a session at the root location
    pub fn new(store: S, region: impl Into<String>, output_config: OutputConfig) -> Self {
        Self {
            store,
            location: Location::root(),
            region: region.into(),
            formatter: Formatter::new(output_config.clone()),
            output_config,
        }
    }

    /// Current location
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Run one classified command against the session state
    ///
    /// `Quit` is a no-op here; the loop handles termination.
    pub async fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Quit => Ok(Outcome::quiet()),
            Command::CreateBucket(args) => {
                commands::mb::execute(&args, &self.store, &self.region).await
            }
            Command::ChangeLocation(args) => {
                commands::chlocn::execute(&args, &self.store, &mut self.location).await
            }
            Command::ListContents(args) => {
                commands::ls::execute(&args, &self.store, &self.location).await
            }
            Command::CopyToCloud(args) => {
                commands::cp::execute(&args, &self.store, &self.output_config).await
            }
            Command::LocalPassthrough(line) => commands::local::execute(&line).await,
        }
    }

    /// Read lines from `input` until quit or end of input
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> io::Result<ExitCode> {
        self.formatter.prompt(out, &self.location)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                self.formatter.prompt(out, &self.location)?;
                continue;
            }

            let command = commands::route(line);
            if command == Command::Quit {
                tracing::info!("Shell terminated by user");
                return Ok(ExitCode::Success);
            }

            tracing::debug!(?command, "Executing");
            match self.execute(command).await {
                Ok(outcome) => self.render(out, &outcome)?,
                Err(e) => {
                    tracing::debug!(error = %e, "Command failed");
                    self.formatter.error(out, &e)?;
                }
            }

            self.formatter.prompt(out, &self.location)?;
        }

        // End of input behaves like quit
        writeln!(out)?;
        Ok(ExitCode::Success)
    }

    fn render<W: Write>(&self, out: &mut W, outcome: &Outcome) -> io::Result<()> {
        self.formatter.lines(out, &outcome.lines)?;
        if let Some(message) = &outcome.success {
            self.formatter.success(out, message)?;
        }
        Ok(())
    }
}

//! Local pass-through commands
//!
//! Lines the router does not recognize run through the system shell, so globs,
//! quotes, pipes and redirection behave as usual. For common filesystem
//! commands a failing exit status is reported; other lines are not checked.
//! `cd` is handled in-process so it changes the shell's own directory.

use std::path::PathBuf;

use s5_core::{Error, Result};
use tokio::process::Command;

use super::Outcome;

/// Commands whose exit status is checked
pub const CHECKED_COMMANDS: &[&str] = &[
    "ls", "pwd", "mkdir", "rmdir", "rm", "cp", "mv", "cat", "touch", "echo", "head", "tail", "wc",
    "grep", "find",
];

/// Execute a pass-through line
pub async fn execute(line: &str) -> Result<Outcome> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&program, args)) = tokens.split_first() else {
        return Ok(Outcome::quiet());
    };

    if program == "cd" {
        return change_dir(args);
    }

    if CHECKED_COMMANDS.contains(&program) {
        run_checked(program, line).await?;
    } else {
        run_in_shell(line).await;
    }

    Ok(Outcome::quiet())
}

async fn run_checked(program: &str, line: &str) -> Result<()> {
    tracing::debug!(program, line, "Running local command");

    let status = shell_command()
        .arg(line)
        .status()
        .await
        .map_err(|e| Error::LocalCommand(format!("{program}: {e}")))?;

    if status.success() {
        return Ok(());
    }

    let reason = match status.code() {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    };
    Err(Error::LocalCommand(format!("'{program}' failed with {reason}")))
}

async fn run_in_shell(line: &str) {
    let mut command = shell_command();
    command.arg(line);

    match command.status().await {
        Ok(status) => tracing::debug!(line, code = ?status.code(), "Shell command finished"),
        Err(e) => tracing::warn!(line, error = %e, "Could not start system shell"),
    }
}

#[cfg(unix)]
fn shell_command() -> Command {
    let mut command = Command::new("sh");
    command.arg("-c");
    command
}

#[cfg(windows)]
fn shell_command() -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C");
    command
}

fn change_dir(args: &[&str]) -> Result<Outcome> {
    let target = match args {
        [] => dirs::home_dir()
            .ok_or_else(|| Error::LocalCommand("cd: cannot determine home directory".into()))?,
        [dir] => PathBuf::from(dir),
        _ => return Err(Error::MalformedCommand("usage: cd [directory]".into())),
    };

    std::env::set_current_dir(&target)
        .map_err(|e| Error::LocalCommand(format!("cd {}: {e}", target.display())))?;
    tracing::debug!(dir = %target.display(), "Changed working directory");

    Ok(Outcome::quiet())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_checked_command_success() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("created");

        let outcome = execute(&format!("mkdir {}", dir.display())).await.unwrap();
        assert_eq!(outcome, Outcome::quiet());
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_checked_command_failure_reports_status() {
        let err = execute("ls /s5-definitely-missing-dir").await.unwrap_err();
        assert!(matches!(err, Error::LocalCommand(_)));
        assert!(err.to_string().contains("'ls' failed with exit status"));
    }

    #[tokio::test]
    async fn test_checked_command_expands_glob() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "b").unwrap();

        let line = format!("ls {}/*.txt", temp_dir.path().display());
        assert!(execute(&line).await.is_ok());
    }

    #[tokio::test]
    async fn test_checked_command_honours_redirect() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out.txt");

        execute(&format!("echo hello > {}", out.display())).await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "hello\n");
    }

    #[tokio::test]
    async fn test_checked_command_honours_pipe() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("a.txt");
        let out = temp_dir.path().join("matches.txt");
        std::fs::write(&input, "foo\nbar\nfood\n").unwrap();

        let line = format!("cat {} | grep foo > {}", input.display(), out.display());
        execute(&line).await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "foo\nfood\n");
    }

    #[tokio::test]
    async fn test_checked_pipeline_reports_status() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("a.txt");
        std::fs::write(&input, "bar\n").unwrap();

        let err = execute(&format!("cat {} | grep foo", input.display()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("'cat' failed with exit status 1"));
    }

    #[tokio::test]
    async fn test_unchecked_command_ignores_status() {
        assert!(execute("false").await.is_ok());
        assert!(execute("s5-no-such-program --flag").await.is_ok());
    }

    #[tokio::test]
    async fn test_cd_to_missing_directory() {
        let before = std::env::current_dir().unwrap();
        let err = execute("cd /s5-definitely-missing-dir").await.unwrap_err();
        assert!(matches!(err, Error::LocalCommand(_)));
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[tokio::test]
    async fn test_cd_too_many_args() {
        let err = execute("cd a b").await.unwrap_err();
        assert!(matches!(err, Error::MalformedCommand(_)));
    }

    #[tokio::test]
    async fn test_blank_line() {
        assert_eq!(execute("   ").await.unwrap(), Outcome::quiet());
    }
}

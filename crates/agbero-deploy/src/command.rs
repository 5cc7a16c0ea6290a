//! External command invocation.

use std::fmt;
use std::path::Path;

use tokio::process::Command;

use crate::error::DeployError;

/// A program plus its arguments. No shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, A>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `command` in `cwd` to completion, capturing stdout and stderr.
    ///
    /// A non-zero exit is not an error here; only failing to start is.
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<CommandOutput, DeployError>;
}

impl<R: CommandRunner> CommandRunner for &R {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<CommandOutput, DeployError> {
        (**self).run(command, cwd).await
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<CommandOutput, DeployError> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .output()
            .await
            .map_err(|source| DeployError::Spawn {
                command: command.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let spec = CommandSpec::new("git", ["commit", "-m", "Auto-deploy: done"]);
        assert_eq!(spec.to_string(), r#"git commit -m "Auto-deploy: done""#);
    }

    #[test]
    fn display_of_bare_program() {
        assert_eq!(CommandSpec::new("solana", Vec::<String>::new()).to_string(), "solana");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_streams_and_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "echo out; echo err >&2; exit 3"]);

        let output = TokioCommandRunner.run(&spec, dir.path()).await.unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(!output.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runs_in_the_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();
        let spec = CommandSpec::new("ls", Vec::<String>::new());

        let output = TokioCommandRunner.run(&spec, dir.path()).await.unwrap();
        assert!(output.success());
        assert!(output.stdout.contains("marker.txt"));
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("agbero-definitely-not-installed", ["--version"]);

        let err = TokioCommandRunner.run(&spec, dir.path()).await.unwrap_err();
        assert!(matches!(err, DeployError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}

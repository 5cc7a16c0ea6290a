#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use std::path::PathBuf;

use agbero_deploy::DeployError;
use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod console;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("agbero error: {error:#}");
        std::process::exit(exit_code(&error));
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    let project_root = resolve_project_root(flags.project.as_deref())?;
    let config = agbero_config::AgberoConfig::load_with_dotenv(&project_root)
        .context("failed to load agbero configuration")?;

    let ctx = context::AppContext::new(project_root, config, flags.offline);
    commands::dispatch(cli.command, &ctx, &flags).await
}

/// A failed deploy step exits with that command's status; everything else with 1.
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<DeployError>()
        .map_or(1, DeployError::exit_code)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGBERO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    std::env::current_dir().context("failed to read current directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_failures_keep_their_exit_code() {
        let error = anyhow::Error::from(DeployError::CommandFailed {
            command: "anchor deploy".into(),
            code: 4,
            stderr: String::new(),
        });
        assert_eq!(exit_code(&error), 4);
    }

    #[test]
    fn context_wrapped_deploy_failure_still_maps() {
        let error = anyhow::Error::from(DeployError::CommandFailed {
            command: "git commit".into(),
            code: 128,
            stderr: String::new(),
        })
        .context("deployment failed");
        assert_eq!(exit_code(&error), 128);
    }

    #[test]
    fn other_errors_exit_with_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("bad flag")), 1);
    }

    #[test]
    fn missing_project_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(resolve_project_root(missing.to_str()).is_err());
        assert_eq!(
            resolve_project_root(dir.path().to_str()).unwrap(),
            dir.path().to_path_buf()
        );
    }
}

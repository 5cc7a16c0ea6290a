//! The deployment pipeline.
//!
//! The program id is only known after the first deploy but has to be baked
//! into `Anchor.toml` and the program source, hence build → deploy → patch →
//! rebuild → redeploy. Nothing is idempotent and nothing is rolled back: a
//! failure after patching leaves the patched files in place.

use std::path::{Path, PathBuf};

use agbero_config::DeployConfig;
use serde::Serialize;

use crate::command::{CommandOutput, CommandRunner, CommandSpec};
use crate::error::DeployError;
use crate::observer::DeployObserver;
use crate::parse::{parse_balance, parse_program_id};
use crate::patch::{FilePatch, PatchOutcome, patch_placeholder};

/// Components reported for the first build cycle.
pub const BUILD_COMPONENTS: [&str; 2] = ["lib.rs", "idl generation"];

/// One external command in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
    pub command: CommandSpec,
    /// A failing critical step aborts the run; a non-critical one only warns.
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployReport {
    pub program_id: String,
    pub network: String,
    pub balance_sol: f64,
    pub airdrop_requested: bool,
    pub patched_files: Vec<FilePatch>,
    pub tests_passed: bool,
}

pub struct Deployer<R> {
    runner: R,
    settings: DeployConfig,
    project_root: PathBuf,
}

impl<R: CommandRunner> Deployer<R> {
    #[must_use]
    pub fn new(runner: R, settings: DeployConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            settings,
            project_root: project_root.into(),
        }
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run every step in order.
    ///
    /// Returns the first critical failure. Observers see each checkpoint but
    /// have no say in the outcome.
    pub async fn run<O: DeployObserver>(&self, observer: &mut O) -> Result<DeployReport, DeployError> {
        let network = self.settings.network.as_str();
        observer.deploy_started().await;

        self.critical(
            observer,
            &format!("Configuring Solana for {network}"),
            CommandSpec::new("solana", ["config", "set", "--url", network]),
        )
        .await?;

        let balance_output = self
            .critical(
                observer,
                "Checking balance",
                CommandSpec::new("solana", ["balance"]),
            )
            .await?;
        let balance_sol = parse_balance(&balance_output.stdout)?;
        let threshold = self.settings.funding_threshold_sol;
        observer.balance_checked(balance_sol, threshold).await;

        let airdrop_requested = balance_sol < threshold;
        if airdrop_requested {
            let amount = self.settings.airdrop_sol.to_string();
            self.critical(
                observer,
                &format!("Requesting {network} SOL"),
                CommandSpec::new("solana", ["airdrop", amount.as_str()]),
            )
            .await?;
        }

        self.critical(observer, "Building Anchor program", anchor("build"))
            .await?;
        observer.build_completed(&BUILD_COMPONENTS).await;

        let deploy_output = self
            .critical(observer, &format!("Deploying to {network}"), anchor("deploy"))
            .await?;
        let program_id = parse_program_id(&deploy_output.stdout, &self.settings.program_id_label)?;
        tracing::info!(%program_id, "program deployed");
        observer.program_deployed(&program_id, network).await;

        let patched_files = self.patch_files(&program_id)?;
        observer.files_patched(&patched_files).await;

        self.critical(observer, "Rebuilding with final program ID", anchor("build"))
            .await?;
        self.critical(observer, "Final deployment", anchor("deploy"))
            .await?;

        let tests_passed = self
            .advisory(
                observer,
                "Running tests",
                CommandSpec::new("anchor", ["test", "--skip-local-validator"]),
            )
            .await;
        observer.tests_finished(tests_passed).await;

        self.critical(
            observer,
            "Staging changes",
            CommandSpec::new("git", ["add", "-A"]),
        )
        .await?;
        self.critical(
            observer,
            "Committing deployment",
            CommandSpec::new("git", ["commit", "-m", self.settings.commit_message.as_str()]),
        )
        .await?;

        let report = DeployReport {
            program_id,
            network: network.to_string(),
            balance_sol,
            airdrop_requested,
            patched_files,
            tests_passed,
        };
        observer.deploy_completed(&report).await;
        Ok(report)
    }

    async fn critical<O: DeployObserver>(
        &self,
        observer: &mut O,
        description: &str,
        command: CommandSpec,
    ) -> Result<CommandOutput, DeployError> {
        let step = Step {
            description: description.to_string(),
            command,
            critical: true,
        };
        observer.step_started(&step).await;
        tracing::debug!(command = %step.command, "running step");

        let output = match self.runner.run(&step.command, &self.project_root).await {
            Ok(output) => output,
            Err(error) => {
                observer.step_failed(&step, &not_started(&error)).await;
                return Err(error);
            }
        };
        if output.success() {
            observer.step_completed(&step, &output).await;
            return Ok(output);
        }

        observer.step_failed(&step, &output).await;
        Err(DeployError::CommandFailed {
            command: step.command.to_string(),
            code: output.code.unwrap_or(1),
            stderr: output.stderr,
        })
    }

    /// Run a step whose failure, including failing to start, is only a warning.
    async fn advisory<O: DeployObserver>(
        &self,
        observer: &mut O,
        description: &str,
        command: CommandSpec,
    ) -> bool {
        let step = Step {
            description: description.to_string(),
            command,
            critical: false,
        };
        observer.step_started(&step).await;

        let output = match self.runner.run(&step.command, &self.project_root).await {
            Ok(output) => output,
            Err(error) => {
                tracing::warn!(%error, command = %step.command, "advisory step could not run");
                observer.step_failed(&step, &not_started(&error)).await;
                return false;
            }
        };

        if output.success() {
            observer.step_completed(&step, &output).await;
            true
        } else {
            tracing::warn!(command = %step.command, code = ?output.code, "advisory step failed");
            observer.step_failed(&step, &output).await;
            false
        }
    }

    fn patch_files(&self, program_id: &str) -> Result<Vec<FilePatch>, DeployError> {
        let placeholder = self.settings.placeholder_program_id.as_str();
        self.settings
            .patch_files
            .iter()
            .map(|relative| {
                let path = self.project_root.join(relative);
                let outcome = patch_placeholder(&path, placeholder, program_id)?;
                if outcome == PatchOutcome::Missing {
                    tracing::warn!(path = %path.display(), "file to patch not found; skipped");
                }
                Ok(FilePatch { path, outcome })
            })
            .collect()
    }
}

/// What observers see for a command that never ran.
fn not_started(error: &DeployError) -> CommandOutput {
    CommandOutput {
        code: None,
        stdout: String::new(),
        stderr: error.to_string(),
    }
}

fn anchor(subcommand: &str) -> CommandSpec {
    CommandSpec::new("anchor", [subcommand])
}

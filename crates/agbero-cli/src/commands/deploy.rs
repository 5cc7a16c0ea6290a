use agbero_core::ActivityStats;
use agbero_deploy::{DeployReport, Deployer, TokioCommandRunner};
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeployArgs;
use crate::console::ConsoleObserver;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeployResponse {
    #[serde(flatten)]
    report: DeployReport,
    /// Absent when activity logging was disabled or unavailable.
    activity: Option<ActivityStats>,
}

/// Handle `agbero deploy`.
pub async fn handle(args: &DeployArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let logger = if args.no_activity_log {
        None
    } else {
        match ctx.logger() {
            Ok(logger) => Some(logger),
            Err(error) => {
                tracing::warn!(%error, "activity logger unavailable, deploying without on-chain logging");
                None
            }
        }
    };

    let deployer = Deployer::new(
        TokioCommandRunner,
        ctx.config.deploy.clone(),
        ctx.project_root.clone(),
    );
    let mut observers = (ConsoleObserver::new(flags.quiet), logger);

    let report = deployer
        .run(&mut observers)
        .await
        .context("deployment failed")?;

    let activity = observers.1.as_ref().map(agbero_activity::ActivityLogger::stats);
    output(&DeployResponse { report, activity }, flags.format)
}

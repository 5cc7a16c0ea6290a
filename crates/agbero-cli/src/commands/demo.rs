use agbero_activity::ActivityLogger;
use agbero_core::{ActivityData, ActivityStats};
use agbero_ledger::MemoSubmitter;
use anyhow::Context;
use serde::Serialize;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::LoggedActivity;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DemoResponse {
    activities: Vec<LoggedActivity>,
    stats: ActivityStats,
}

/// Handle `agbero demo`: a startup, one build cycle and a deployment.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut logger = ctx.logger().context("failed to initialize activity logger")?;
    let deploy = &ctx.config.deploy;
    let response = run_demo(&mut logger, &deploy.placeholder_program_id, &deploy.network).await?;
    output(&response, flags.format)
}

async fn run_demo<S: MemoSubmitter>(
    logger: &mut ActivityLogger<S>,
    program_id: &str,
    network: &str,
) -> anyhow::Result<DemoResponse> {
    let mut activities = Vec::with_capacity(3);

    let mut startup = ActivityData::new();
    startup.insert("version".into(), json!(env!("CARGO_PKG_VERSION")));
    startup.insert("mode".into(), json!("autonomous"));
    let id = logger.log("startup", startup).await;
    activities.push(LoggedActivity::latest(logger, id)?);

    let id = logger.log_build_cycle(&["lib.rs", "Cargo.toml"]).await;
    activities.push(LoggedActivity::latest(logger, id)?);

    let id = logger.log_deployment(program_id, network).await;
    activities.push(LoggedActivity::latest(logger, id)?);

    Ok(DemoResponse {
        activities,
        stats: logger.stats(),
    })
}

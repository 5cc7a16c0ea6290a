use anyhow::Context;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LogArgs;
use crate::commands::LoggedActivity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agbero log`.
pub async fn handle(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let data: Value = serde_json::from_str(&args.data).context("--data is not valid JSON")?;
    let mut logger = ctx.logger().context("failed to initialize activity logger")?;

    let id = logger
        .log_value(&args.action, data)
        .await
        .context("--data must be a JSON object")?;

    output(&LoggedActivity::latest(&logger, id)?, flags.format)
}

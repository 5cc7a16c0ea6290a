use agbero_ledger::parse_address;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProgramArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `agbero program`.
pub async fn handle(args: &ProgramArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let program_id = parse_address(&args.program_id)?;
    let reader = ctx.reader()?;

    let progress = Progress::spinner(&format!("Fetching {program_id}"));
    let info = match reader.program_info(&program_id).await {
        Ok(info) => {
            progress.finish_ok("Fetched program account");
            info
        }
        Err(error) => {
            progress.finish_err("Program lookup failed");
            return Err(error).with_context(|| format!("failed to query {}", reader.endpoint()));
        }
    };

    if !info.exists {
        tracing::warn!(%program_id, "program account not found");
    }
    output(&info, flags.format)
}

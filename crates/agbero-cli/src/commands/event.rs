use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EventCommands;
use crate::commands::LoggedActivity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agbero event <kind>`.
pub async fn handle(
    action: &EventCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut logger = ctx.logger().context("failed to initialize activity logger")?;

    let id = match action {
        EventCommands::BuildCycle { components } => {
            let components: Vec<&str> = components.iter().map(String::as_str).collect();
            logger.log_build_cycle(&components).await
        }
        EventCommands::Deployment {
            program_id,
            network,
        } => logger.log_deployment(program_id, network).await,
        EventCommands::BondCreated {
            bond_id,
            principal,
            collateral,
        } => logger.log_bond_created(bond_id, principal, *collateral).await,
        EventCommands::VerificationVote {
            bond_id,
            approve,
            confidence,
        } => {
            logger
                .log_verification_vote(bond_id, *approve, *confidence)
                .await
        }
        EventCommands::BondFinalized {
            bond_id,
            outcome,
            stake_amount,
        } => {
            logger
                .log_bond_finalized(bond_id, outcome, *stake_amount)
                .await
        }
    };

    output(&LoggedActivity::latest(&logger, id)?, flags.format)
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Log(args) => commands::log::handle(&args, ctx, flags).await,
        Commands::Event { action } => commands::event::handle(&action, ctx, flags).await,
        Commands::Demo => commands::demo::handle(ctx, flags).await,
        Commands::Deploy(args) => commands::deploy::handle(&args, ctx, flags).await,
        Commands::Verify(args) => commands::verify::handle(&args, flags),
        Commands::Program(args) => commands::program::handle(&args, ctx, flags).await,
        Commands::Activity(args) => commands::activity::handle(&args, ctx, flags).await,
    }
}

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hash an activity and anchor its memo on-chain
    Log(LogArgs),
    /// Log a fixed-shape event
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Log a startup, a build cycle and a deployment, then print stats
    Demo,
    /// Configure, fund, build, deploy, patch, redeploy, test and commit
    Deploy(DeployArgs),
    /// Check a JSON activity record against a published memo
    Verify(VerifyArgs),
    /// Show the on-chain account state of a program
    Program(ProgramArgs),
    /// List recent transactions of an address and the Agbero memos they carry
    Activity(ActivityArgs),
}

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Event name, e.g. `startup`
    pub action: String,

    /// Payload as a JSON object
    #[arg(long, default_value = "{}")]
    pub data: String,
}

#[derive(Debug, Subcommand)]
pub enum EventCommands {
    /// A build cycle (file creation, compilation, test)
    BuildCycle {
        /// Component that was built (repeatable)
        #[arg(long = "component", required = true)]
        components: Vec<String>,
    },
    /// A program deployment
    Deployment {
        #[arg(long)]
        program_id: String,
        #[arg(long, default_value = "devnet")]
        network: String,
    },
    /// A bond was created
    BondCreated {
        #[arg(long)]
        bond_id: String,
        #[arg(long)]
        principal: String,
        /// Collateral in SOL
        #[arg(long)]
        collateral: f64,
    },
    /// A verification vote on a bond
    VerificationVote {
        #[arg(long)]
        bond_id: String,
        /// Vote to approve (omit to reject)
        #[arg(long)]
        approve: bool,
        #[arg(long)]
        confidence: f64,
    },
    /// A bond reached its outcome
    BondFinalized {
        #[arg(long)]
        bond_id: String,
        #[arg(long)]
        outcome: String,
        /// Stake amount in SOL
        #[arg(long)]
        stake_amount: f64,
    },
}

#[derive(Debug, Args)]
pub struct DeployArgs {
    /// Skip on-chain activity logging of deploy steps
    #[arg(long)]
    pub no_activity_log: bool,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Published memo, `AGBERO:<action>:<hash>:<timestamp>`
    #[arg(long)]
    pub memo: String,

    /// JSON file holding the full activity record
    #[arg(long)]
    pub record: PathBuf,
}

#[derive(Debug, Args)]
pub struct ProgramArgs {
    /// Program address (base58)
    #[arg(long)]
    pub program_id: String,
}

#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Address to list (defaults to the signer of the configured keypair)
    #[arg(long)]
    pub address: Option<String>,

    /// Maximum number of transactions, newest first
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=1000))]
    pub limit: u16,
}

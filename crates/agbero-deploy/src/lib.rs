//! # agbero-deploy
//!
//! Two-pass deployment of the Agbero program:
//! configure → fund → build → deploy → patch program id → rebuild →
//! redeploy → test → commit.
//!
//! Each step shells out through a [`CommandRunner`]. Progress and activity
//! logging hang off [`DeployObserver`] checkpoints, which never influence
//! whether the pipeline succeeds.

pub mod command;
mod error;
pub mod observer;
pub mod parse;
pub mod patch;
pub mod pipeline;

pub use command::{CommandOutput, CommandRunner, CommandSpec, TokioCommandRunner};
pub use error::DeployError;
pub use observer::{DeployObserver, NoopObserver};
pub use parse::{ParseError, parse_balance, parse_program_id};
pub use patch::{FilePatch, PatchOutcome, patch_placeholder};
pub use pipeline::{BUILD_COMPONENTS, DeployReport, Deployer, Step};

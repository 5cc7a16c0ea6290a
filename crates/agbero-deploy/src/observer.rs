//! Pipeline checkpoints.
//!
//! Observers are told what happened; they cannot change the outcome. Every
//! method defaults to doing nothing.

use agbero_activity::ActivityLogger;
use agbero_core::ActivityData;
use agbero_ledger::MemoSubmitter;
use serde_json::{Value, json};

use crate::command::CommandOutput;
use crate::patch::FilePatch;
use crate::pipeline::{DeployReport, Step};

/// Characters of command stdout kept in `command_complete` activities.
const OUTPUT_EXCERPT_CHARS: usize = 200;

#[allow(async_fn_in_trait)]
pub trait DeployObserver {
    async fn deploy_started(&mut self) {}

    async fn step_started(&mut self, _step: &Step) {}

    async fn step_completed(&mut self, _step: &Step, _output: &CommandOutput) {}

    /// A step exited non-zero. For critical steps the run aborts right after.
    async fn step_failed(&mut self, _step: &Step, _output: &CommandOutput) {}

    async fn balance_checked(&mut self, _balance_sol: f64, _threshold_sol: f64) {}

    async fn build_completed(&mut self, _components: &[&str]) {}

    async fn program_deployed(&mut self, _program_id: &str, _network: &str) {}

    async fn files_patched(&mut self, _patches: &[FilePatch]) {}

    async fn tests_finished(&mut self, _passed: bool) {}

    async fn deploy_completed(&mut self, _report: &DeployReport) {}
}

/// Observer that ignores every checkpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DeployObserver for NoopObserver {}

impl<T: DeployObserver> DeployObserver for &mut T {
    async fn deploy_started(&mut self) {
        (**self).deploy_started().await;
    }

    async fn step_started(&mut self, step: &Step) {
        (**self).step_started(step).await;
    }

    async fn step_completed(&mut self, step: &Step, output: &CommandOutput) {
        (**self).step_completed(step, output).await;
    }

    async fn step_failed(&mut self, step: &Step, output: &CommandOutput) {
        (**self).step_failed(step, output).await;
    }

    async fn balance_checked(&mut self, balance_sol: f64, threshold_sol: f64) {
        (**self).balance_checked(balance_sol, threshold_sol).await;
    }

    async fn build_completed(&mut self, components: &[&str]) {
        (**self).build_completed(components).await;
    }

    async fn program_deployed(&mut self, program_id: &str, network: &str) {
        (**self).program_deployed(program_id, network).await;
    }

    async fn files_patched(&mut self, patches: &[FilePatch]) {
        (**self).files_patched(patches).await;
    }

    async fn tests_finished(&mut self, passed: bool) {
        (**self).tests_finished(passed).await;
    }

    async fn deploy_completed(&mut self, report: &DeployReport) {
        (**self).deploy_completed(report).await;
    }
}

/// An absent observer is a no-op.
impl<T: DeployObserver> DeployObserver for Option<T> {
    async fn deploy_started(&mut self) {
        if let Some(inner) = self {
            inner.deploy_started().await;
        }
    }

    async fn step_started(&mut self, step: &Step) {
        if let Some(inner) = self {
            inner.step_started(step).await;
        }
    }

    async fn step_completed(&mut self, step: &Step, output: &CommandOutput) {
        if let Some(inner) = self {
            inner.step_completed(step, output).await;
        }
    }

    async fn step_failed(&mut self, step: &Step, output: &CommandOutput) {
        if let Some(inner) = self {
            inner.step_failed(step, output).await;
        }
    }

    async fn balance_checked(&mut self, balance_sol: f64, threshold_sol: f64) {
        if let Some(inner) = self {
            inner.balance_checked(balance_sol, threshold_sol).await;
        }
    }

    async fn build_completed(&mut self, components: &[&str]) {
        if let Some(inner) = self {
            inner.build_completed(components).await;
        }
    }

    async fn program_deployed(&mut self, program_id: &str, network: &str) {
        if let Some(inner) = self {
            inner.program_deployed(program_id, network).await;
        }
    }

    async fn files_patched(&mut self, patches: &[FilePatch]) {
        if let Some(inner) = self {
            inner.files_patched(patches).await;
        }
    }

    async fn tests_finished(&mut self, passed: bool) {
        if let Some(inner) = self {
            inner.tests_finished(passed).await;
        }
    }

    async fn deploy_completed(&mut self, report: &DeployReport) {
        if let Some(inner) = self {
            inner.deploy_completed(report).await;
        }
    }
}

/// Fan out to two observers, first then second.
impl<A: DeployObserver, B: DeployObserver> DeployObserver for (A, B) {
    async fn deploy_started(&mut self) {
        self.0.deploy_started().await;
        self.1.deploy_started().await;
    }

    async fn step_started(&mut self, step: &Step) {
        self.0.step_started(step).await;
        self.1.step_started(step).await;
    }

    async fn step_completed(&mut self, step: &Step, output: &CommandOutput) {
        self.0.step_completed(step, output).await;
        self.1.step_completed(step, output).await;
    }

    async fn step_failed(&mut self, step: &Step, output: &CommandOutput) {
        self.0.step_failed(step, output).await;
        self.1.step_failed(step, output).await;
    }

    async fn balance_checked(&mut self, balance_sol: f64, threshold_sol: f64) {
        self.0.balance_checked(balance_sol, threshold_sol).await;
        self.1.balance_checked(balance_sol, threshold_sol).await;
    }

    async fn build_completed(&mut self, components: &[&str]) {
        self.0.build_completed(components).await;
        self.1.build_completed(components).await;
    }

    async fn program_deployed(&mut self, program_id: &str, network: &str) {
        self.0.program_deployed(program_id, network).await;
        self.1.program_deployed(program_id, network).await;
    }

    async fn files_patched(&mut self, patches: &[FilePatch]) {
        self.0.files_patched(patches).await;
        self.1.files_patched(patches).await;
    }

    async fn tests_finished(&mut self, passed: bool) {
        self.0.tests_finished(passed).await;
        self.1.tests_finished(passed).await;
    }

    async fn deploy_completed(&mut self, report: &DeployReport) {
        self.0.deploy_completed(report).await;
        self.1.deploy_completed(report).await;
    }
}

fn activity(pairs: Vec<(&str, Value)>) -> ActivityData {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Records every critical command and milestone as an on-chain activity.
///
/// The advisory test step only shows up as `tests_passed` when it passes.
impl<S: MemoSubmitter> DeployObserver for ActivityLogger<S> {
    async fn deploy_started(&mut self) {
        let data = activity(vec![("version", json!(env!("CARGO_PKG_VERSION")))]);
        self.log("deploy_start", data).await;
    }

    async fn step_started(&mut self, step: &Step) {
        if !step.critical {
            return;
        }
        let data = activity(vec![
            ("command", json!(step.command.to_string())),
            ("description", json!(step.description)),
        ]);
        self.log("command_start", data).await;
    }

    async fn step_completed(&mut self, step: &Step, output: &CommandOutput) {
        if !step.critical {
            return;
        }
        let excerpt: String = output.stdout.chars().take(OUTPUT_EXCERPT_CHARS).collect();
        let data = activity(vec![
            ("command", json!(step.command.to_string())),
            ("output", json!(excerpt)),
        ]);
        self.log("command_complete", data).await;
    }

    async fn step_failed(&mut self, step: &Step, output: &CommandOutput) {
        if !step.critical {
            return;
        }
        let data = activity(vec![
            ("command", json!(step.command.to_string())),
            ("error", json!(output.stderr)),
        ]);
        self.log("command_error", data).await;
    }

    async fn build_completed(&mut self, components: &[&str]) {
        self.log_build_cycle(components).await;
    }

    async fn program_deployed(&mut self, program_id: &str, network: &str) {
        self.log_deployment(program_id, network).await;
    }

    async fn tests_finished(&mut self, passed: bool) {
        if passed {
            let data = activity(vec![("count", json!("all"))]);
            self.log("tests_passed", data).await;
        }
    }

    async fn deploy_completed(&mut self, _report: &DeployReport) {
        let data = match serde_json::to_value(self.stats()) {
            Ok(Value::Object(map)) => map,
            _ => ActivityData::new(),
        };
        self.log("deploy_complete", data).await;
    }
}

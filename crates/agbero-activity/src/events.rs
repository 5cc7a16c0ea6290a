//! Fixed-shape wrappers over [`ActivityLogger::log`], one per event category.

use agbero_core::ActivityData;
use agbero_ledger::MemoSubmitter;
use serde_json::{Value, json};

use crate::logger::ActivityLogger;

fn fields<const N: usize>(pairs: [(&str, Value); N]) -> ActivityData {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

impl<S: MemoSubmitter> ActivityLogger<S> {
    /// A build cycle: files created, compiled, tested.
    pub async fn log_build_cycle(&mut self, components: &[&str]) -> String {
        let cycle_number = self.next_build_cycle();
        let data = fields([
            ("cycle_number", json!(cycle_number)),
            ("components_built", json!(components)),
            ("total_activities", json!(self.activity_count())),
        ]);
        self.log("build_cycle", data).await
    }

    pub async fn log_deployment(&mut self, program_id: &str, network: &str) -> String {
        let data = fields([
            ("program_id", json!(program_id)),
            ("network", json!(network)),
            ("validator", json!(self.submitter().signer())),
        ]);
        self.log("deployment", data).await
    }

    pub async fn log_bond_created(&mut self, bond_id: &str, principal: &str, collateral: f64) -> String {
        let data = fields([
            ("bond_id", json!(bond_id)),
            ("principal", json!(principal)),
            ("collateral_sol", json!(collateral)),
        ]);
        self.log("bond_created", data).await
    }

    pub async fn log_verification_vote(
        &mut self,
        bond_id: &str,
        approve: bool,
        confidence: f64,
    ) -> String {
        let data = fields([
            ("bond_id", json!(bond_id)),
            ("approve", json!(approve)),
            ("confidence", json!(confidence)),
            ("validator", json!(self.submitter().signer())),
        ]);
        self.log("verification_vote", data).await
    }

    pub async fn log_bond_finalized(
        &mut self,
        bond_id: &str,
        outcome: &str,
        stake_amount: f64,
    ) -> String {
        let data = fields([
            ("bond_id", json!(bond_id)),
            ("outcome", json!(outcome)),
            ("stake_amount_sol", json!(stake_amount)),
        ]);
        self.log("bond_finalized", data).await
    }
}

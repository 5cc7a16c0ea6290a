//! Human-facing deploy progress on stderr.

use agbero_deploy::{CommandOutput, DeployObserver, DeployReport, FilePatch, PatchOutcome, Step};

use crate::progress::Progress;

/// Reports each pipeline step as a spinner (on a terminal) or a plain line.
pub struct ConsoleObserver {
    quiet: bool,
    current: Option<Progress>,
}

impl ConsoleObserver {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
            current: None,
        }
    }

    fn line(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Close the active spinner, or print `fallback` when there is none.
    fn settle(&mut self, ok: bool, message: &str) {
        match self.current.take() {
            Some(progress) if progress.is_active() => {
                if ok {
                    progress.finish_ok(message);
                } else {
                    progress.finish_err(message);
                }
            }
            _ => self.line(message),
        }
    }
}

impl DeployObserver for ConsoleObserver {
    async fn deploy_started(&mut self) {
        self.line("Starting Agbero deployment");
    }

    async fn step_started(&mut self, step: &Step) {
        let progress = Progress::spinner(&format!("{}...", step.description));
        if !progress.is_active() {
            self.line(&format!("{}...", step.description));
        }
        self.current = Some(progress);
    }

    async fn step_completed(&mut self, step: &Step, _output: &CommandOutput) {
        self.settle(true, &format!("ok    {}", step.description));
    }

    async fn step_failed(&mut self, step: &Step, output: &CommandOutput) {
        let label = if step.critical { "FAIL" } else { "warn" };
        self.settle(false, &format!("{label}  {} ({})", step.description, step.command));
        // Captured stderr is shown even in quiet mode; it explains the exit.
        let stderr = output.stderr.trim();
        if step.critical && !stderr.is_empty() {
            eprintln!("{stderr}");
        } else if !stderr.is_empty() {
            self.line(stderr);
        }
    }

    async fn balance_checked(&mut self, balance_sol: f64, threshold_sol: f64) {
        self.line(&format!("Balance: {balance_sol} SOL"));
        if balance_sol < threshold_sol {
            self.line(&format!("Balance below {threshold_sol} SOL, requesting airdrop"));
        }
    }

    async fn program_deployed(&mut self, program_id: &str, network: &str) {
        self.line(&format!("Program ID: {program_id} ({network})"));
    }

    async fn files_patched(&mut self, patches: &[FilePatch]) {
        for patch in patches {
            match patch.outcome {
                PatchOutcome::Patched { replacements } => self.line(&format!(
                    "Updated {} ({replacements} replacement{})",
                    patch.path.display(),
                    if replacements == 1 { "" } else { "s" }
                )),
                PatchOutcome::Missing => {
                    self.line(&format!("Skipped {} (not found)", patch.path.display()));
                }
            }
        }
    }

    async fn tests_finished(&mut self, passed: bool) {
        if !passed {
            self.line("Tests failed, continuing without them");
        }
    }

    async fn deploy_completed(&mut self, report: &DeployReport) {
        self.line("");
        self.line("Deployment complete");
        self.line(&format!("  Program ID: {}", report.program_id));
        self.line(&format!("  Network:    {}", report.network));
        self.line("");
        self.line("Next steps:");
        self.line("  1. Exercise the program: anchor test");
        self.line(&format!(
            "  2. Inspect the deployment: solana program show {}",
            report.program_id
        ));
        self.line(&format!(
            "  3. Follow on-chain activity: solana logs {}",
            report.program_id
        ));
    }
}

//! The `rocm-smoke run` command.
//!
//! Prints the banner, runs every selected probe against a shared
//! collector, prints the summary, and turns the collector's exit code into
//! the process exit code. With `--json` the banner, running log and text
//! summary are replaced by a single JSON document.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::cli::args::RunArgs;
use crate::config::{HarnessConfig, ProbeSelection};
use crate::error::Result;
use crate::probes::{ProbeRegistry, ProbeRunner, ProbeStatus};
use crate::results::{Summary, TestResults};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Title shown in the banner.
pub const BANNER_TITLE: &str = "ROCm Package Runtime Test";

/// The run command implementation.
pub struct RunCommand {
    config: HarnessConfig,
    args: RunArgs,
}

/// JSON document printed by `run --json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    summary: Summary<'a>,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(config: HarnessConfig, args: RunArgs) -> Self {
        Self { config, args }
    }

    /// The probes selected by `--only`, `--skip` and `--extended`.
    pub fn registry(&self) -> Result<ProbeRegistry> {
        ProbeRegistry::for_selection(&ProbeSelection::from(&self.args))
    }

    /// Run `registry` into a fresh collector.
    pub fn run_probes(&self, registry: &ProbeRegistry, ui: &mut dyn UserInterface) -> TestResults {
        let locator = self.config.locator();
        debug!(
            search_dirs = ?locator.search_dirs(),
            probes = ?registry.ids(),
            "starting run"
        );

        let mut results = TestResults::new();
        // Libraries stay loaded until `runner` goes out of scope after the last probe.
        let mut runner = ProbeRunner::new(&locator).echo(!self.args.json);
        let reports = runner.run(registry.probes(), &mut results, ui);

        let skipped = reports
            .iter()
            .filter(|r| matches!(r.status, ProbeStatus::Skipped { .. }))
            .count();
        debug!(probes = reports.len(), skipped, "all probes finished");

        results
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = self.registry()?;

        if !self.args.json {
            ui.show_header(BANNER_TITLE);
            ui.message("Running runtime tests...");
            ui.message("");
        }

        let results = self.run_probes(&registry, ui);

        if self.args.json {
            let report = JsonReport {
                tool: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                generated_at: Utc::now(),
                summary: results.summary(),
            };
            let text =
                serde_json::to_string_pretty(&report).context("failed to encode results as JSON")?;
            ui.emit(&text);
        } else {
            ui.show_summary(&results);
        }

        Ok(CommandResult::from_exit_code(results.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn missing_lib_config() -> HarnessConfig {
        HarnessConfig::default()
    }

    #[test]
    fn text_run_prints_banner_and_summary() {
        let cmd = RunCommand::new(missing_lib_config(), RunArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), &[BANNER_TITLE.to_string()]);
        assert!(ui.has_message("Running runtime tests..."));
        assert_eq!(ui.summaries().len(), 1);
        let summary = &ui.summaries()[0];
        assert!(summary.contains("Test Summary"));
        assert_eq!(result.success, !summary.contains("✗ FAIL"));
    }

    #[test]
    fn every_standard_probe_records_an_outcome() {
        let cmd = RunCommand::new(missing_lib_config(), RunArgs::default());
        let mut ui = MockUI::new();

        let registry = cmd.registry().unwrap();
        let results = cmd.run_probes(&registry, &mut ui);

        assert!(results.total() >= 8);
        assert_eq!(results.passed() + results.failed(), results.total());
    }

    #[test]
    fn only_limits_the_run() {
        let args = RunArgs {
            only: vec!["rocfft".into()],
            ..Default::default()
        };
        let cmd = RunCommand::new(missing_lib_config(), args);
        let mut ui = MockUI::new();

        let registry = cmd.registry().unwrap();
        let results = cmd.run_probes(&registry, &mut ui);

        assert_eq!(results.total(), 1);
        assert!(results.outcomes()[0].name().starts_with("rocFFT"));
    }

    #[test]
    fn json_run_emits_document_only() {
        let args = RunArgs {
            only: vec!["hsa".into(), "rocrand".into()],
            json: true,
            ..Default::default()
        };
        let cmd = RunCommand::new(missing_lib_config(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(ui.headers().is_empty());
        assert!(ui.statuses().is_empty());
        assert!(ui.summaries().is_empty());
        assert_eq!(ui.emitted().len(), 1);

        let json: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(json["tool"], "rocm-smoke");
        let total = json["total"].as_u64().unwrap();
        let passed = json["passed"].as_u64().unwrap();
        let failed = json["failed"].as_u64().unwrap();
        assert_eq!(passed + failed, total);
        assert_eq!(json["tests"].as_array().unwrap().len() as u64, total);
        assert_eq!(result.exit_code == 0, failed == 0);
    }

    #[test]
    fn unknown_probe_is_rejected_before_banner() {
        let args = RunArgs {
            skip: vec!["cuda".into()],
            ..Default::default()
        };
        let cmd = RunCommand::new(missing_lib_config(), args);
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
        assert!(ui.headers().is_empty());
        assert!(ui.statuses().is_empty());
    }
}

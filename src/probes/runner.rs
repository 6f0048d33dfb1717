//! Sequential probe execution.
//!
//! For each probe the runner performs the availability check (open every
//! library the probe needs), then either records the absence or runs the
//! probe. Handles are released when the probe returns, but the libraries
//! stay loaded until the runner is dropped: unloading a runtime that has
//! started its own threads in the middle of a run is not safe. Outcomes
//! recorded by a probe are echoed to the UI as the running log.

use std::path::PathBuf;

use tracing::{debug, info, info_span};

use crate::results::TestResults;
use crate::ui::{OutputMode, StatusKind, UserInterface};

use super::loader::{LibraryLocator, VendorLibrary};
use super::Probe;

/// Terminal state of a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// A required library could not be loaded; no vendor call was made.
    Skipped {
        /// Why the library could not be loaded.
        reason: String,
    },
    /// The probe ran and every handle it acquired has been released.
    Released,
}

/// What happened to one probe.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// The probe id.
    pub id: &'static str,
    /// Paths the probe's libraries were loaded from (empty when skipped).
    pub libraries: Vec<PathBuf>,
    /// Terminal state.
    pub status: ProbeStatus,
    /// Number of outcomes the probe recorded.
    pub outcomes: usize,
}

/// Runs probes one after another against a shared collector.
pub struct ProbeRunner<'a> {
    locator: &'a LibraryLocator,
    echo: bool,
    loaded: Vec<VendorLibrary>,
}

impl<'a> ProbeRunner<'a> {
    /// Create a runner that loads libraries through `locator`.
    pub fn new(locator: &'a LibraryLocator) -> Self {
        Self {
            locator,
            echo: true,
            loaded: Vec::new(),
        }
    }

    /// Whether to show spinners and the running log (default: true).
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Libraries loaded so far, in load order.
    pub fn loaded(&self) -> &[VendorLibrary] {
        &self.loaded
    }

    /// Run every probe in order.
    pub fn run(
        &mut self,
        probes: &[Box<dyn Probe>],
        results: &mut TestResults,
        ui: &mut dyn UserInterface,
    ) -> Vec<ProbeReport> {
        probes
            .iter()
            .map(|probe| self.run_probe(probe.as_ref(), results, ui))
            .collect()
    }

    /// Run a single probe.
    pub fn run_probe(
        &mut self,
        probe: &dyn Probe,
        results: &mut TestResults,
        ui: &mut dyn UserInterface,
    ) -> ProbeReport {
        let span = info_span!("probe", id = probe.id());
        let _enter = span.enter();

        let first = results.total();
        let mut spinner = self
            .echo
            .then(|| ui.start_spinner(&format!("Probing {}...", probe.label())));

        let (status, libraries) = match self.load(probe) {
            Err(e) => {
                let reason = e.to_string();
                info!("{} unavailable: {}", probe.label(), reason);
                results.fail(probe.label(), reason.clone());
                (ProbeStatus::Skipped { reason }, Vec::new())
            }
            Ok(loaded) => {
                let paths: Vec<PathBuf> = loaded.iter().map(|l| l.path().to_path_buf()).collect();
                debug!("running probe");
                probe.run(&loaded, results);
                self.loaded.extend(loaded);
                (ProbeStatus::Released, paths)
            }
        };

        if let Some(spinner) = spinner.as_mut() {
            spinner.finish_and_clear();
        }

        if self.echo {
            if ui.output_mode() == OutputMode::Verbose {
                for path in &libraries {
                    ui.message(&format!("  loaded {}", path.display()));
                }
            }
            for outcome in &results.outcomes()[first..] {
                ui.status(StatusKind::from_passed(outcome.passed()), &outcome.describe());
            }
        }

        ProbeReport {
            id: probe.id(),
            libraries,
            status,
            outcomes: results.total() - first,
        }
    }

    fn load(&self, probe: &dyn Probe) -> crate::error::Result<Vec<VendorLibrary>> {
        probe
            .libraries()
            .iter()
            .map(|spec| self.locator.open(spec))
            .collect()
    }
}

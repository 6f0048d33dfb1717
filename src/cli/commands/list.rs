//! The `rocm-smoke list` command.
//!
//! Shows every probe with the library it needs and where that library
//! resolves to. Libraries are opened to check they load, but no vendor
//! function is called.

use crate::cli::args::ListArgs;
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::probes::registry::extended_probes;
use crate::probes::{LibraryLocator, Probe, ProbeRegistry};
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config: HarnessConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: HarnessConfig, args: ListArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = if self.args.standard_only {
            ProbeRegistry::standard()
        } else {
            ProbeRegistry::all()
        };
        let extended: Vec<&'static str> = extended_probes().iter().map(|p| p.id()).collect();
        let locator = self.config.locator();

        ui.show_header("Probes");
        for probe in registry.probes() {
            let (kind, location) = resolve(probe.as_ref(), &locator);
            let marker = if extended.contains(&probe.id()) {
                " (extended)"
            } else {
                ""
            };
            ui.status(
                kind,
                &format!(
                    "{:<10} {:<10} {}{}",
                    probe.id(),
                    probe.label(),
                    location,
                    marker
                ),
            );
        }

        Ok(CommandResult::success())
    }
}

/// Where a probe's libraries load from, or why they don't.
fn resolve(probe: &dyn Probe, locator: &LibraryLocator) -> (StatusKind, String) {
    let mut locations = Vec::new();
    for spec in probe.libraries() {
        match locator.open(spec) {
            Ok(library) => locations.push(library.path().display().to_string()),
            Err(e) => return (StatusKind::Skipped, e.to_string()),
        }
    }
    (StatusKind::Success, locations.join(", "))
}

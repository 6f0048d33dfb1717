//! Vendor library probes.
//!
//! A probe checks that one vendor library is installed and minimally
//! functional. Availability is decided at runtime: the [`ProbeRunner`]
//! tries to open the probe's libraries with the [`LibraryLocator`] and
//! either records a single failing outcome (library absent) or hands the
//! loaded libraries to [`Probe::run`].
//!
//! # Modules
//!
//! - [`loader`] - Locating and opening shared libraries
//! - [`handle`] - RAII wrappers and FFI call helpers
//! - [`lifecycle`] - Setup/query/teardown executed uniformly
//! - [`libs`] - One probe per vendor library
//! - [`registry`] - The ordered set of probes and selection by id
//! - [`runner`] - Availability check, execution and running log

#[cfg(test)]
pub(crate) mod fake;
pub mod handle;
pub mod lifecycle;
pub mod libs;
pub mod loader;
pub mod registry;
pub mod runner;

pub use lifecycle::{Lifecycle, StepError};
pub use loader::{Export, LibraryLocator, LibrarySpec, VendorLibrary};
pub use registry::ProbeRegistry;
pub use runner::{ProbeReport, ProbeRunner, ProbeStatus};

use crate::results::TestResults;

/// A smoke test for one vendor library.
pub trait Probe {
    /// Short lowercase identifier used by `--only` and `--skip`.
    fn id(&self) -> &'static str;

    /// Display label. Also the outcome name when a library is absent.
    fn label(&self) -> &'static str;

    /// Libraries that must load before [`Probe::run`] is called.
    ///
    /// The first entry is the library under test.
    fn libraries(&self) -> &'static [LibrarySpec];

    /// Exercise the library, recording one outcome per step.
    ///
    /// `libraries` holds the loaded libraries in the order returned by
    /// [`Probe::libraries`]. Any handle acquired here must be released
    /// before returning.
    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults);
}

/// Record a failure for a probe handed the wrong set of libraries.
pub(crate) fn unexpected_libraries(
    probe: &dyn Probe,
    libraries: &[VendorLibrary],
    results: &mut TestResults,
) {
    results.fail(
        probe.label(),
        format!(
            "expected {} loaded libraries, got {}",
            probe.libraries().len(),
            libraries.len()
        ),
    );
}

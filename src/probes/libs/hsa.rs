//! HSA runtime probe.

use crate::probes::handle::ScopedSession;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The HSA runtime library.
pub const HSA_RUNTIME64: LibrarySpec = LibrarySpec {
    name: "HSA",
    stem: "hsa-runtime64",
    versions: &["1"],
};

/// Initializes the runtime and shuts it down again.
pub struct HsaProbe;

impl Probe for HsaProbe {
    fn id(&self) -> &'static str {
        "hsa"
    }

    fn label(&self) -> &'static str {
        "HSA"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[HSA_RUNTIME64]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [hsa] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("HSA: Initialize", || {
            ScopedSession::open(hsa, "hsa_init", "hsa_shut_down").map(|session| (session, None))
        })
        .run(results);
    }
}

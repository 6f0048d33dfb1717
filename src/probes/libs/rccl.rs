//! RCCL probe.

use crate::probes::handle::version_int;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The RCCL collective communications library.
pub const RCCL: LibrarySpec = LibrarySpec {
    name: "RCCL",
    stem: "rccl",
    versions: &["1"],
};

/// Reads the numeric library version.
pub struct RcclProbe;

impl Probe for RcclProbe {
    fn id(&self) -> &'static str {
        "rccl"
    }

    fn label(&self) -> &'static str {
        "RCCL"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[RCCL]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [rccl] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::stateless()
            .query("RCCL: Get Version", |_| {
                version_int(rccl, "ncclGetVersion").map(|v| Some(format!("Version: {}", v)))
            })
            .run(results);
    }
}

//! hipSPARSE probe.

use crate::probes::handle::{handle_version_int, ScopedHandle};
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The hipSPARSE library.
pub const HIPSPARSE: LibrarySpec = LibrarySpec {
    name: "hipSPARSE",
    stem: "hipsparse",
    versions: &["4", "1", "0"],
};

/// Creates a handle and reads the version through it.
pub struct HipsparseProbe;

impl Probe for HipsparseProbe {
    fn id(&self) -> &'static str {
        "hipsparse"
    }

    fn label(&self) -> &'static str {
        "hipSPARSE"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[HIPSPARSE]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [hipsparse] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("hipSPARSE: Create Handle", || {
            ScopedHandle::create(hipsparse, "hipsparseCreate", "hipsparseDestroy")
                .map(|handle| (handle, None))
        })
        .query("hipSPARSE: Get Version", |handle| {
            handle_version_int(hipsparse, handle, "hipsparseGetVersion")
                .map(|v| Some(format!("Version: {}", v)))
        })
        .run(results);
    }
}

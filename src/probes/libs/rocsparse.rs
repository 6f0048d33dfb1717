//! rocSPARSE probe.

use crate::probes::handle::{handle_version_int, ScopedHandle};
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The rocSPARSE library.
pub const ROCSPARSE: LibrarySpec = LibrarySpec {
    name: "rocSPARSE",
    stem: "rocsparse",
    versions: &["1", "0"],
};

/// Creates a handle and reads the version through it.
pub struct RocsparseProbe;

impl Probe for RocsparseProbe {
    fn id(&self) -> &'static str {
        "rocsparse"
    }

    fn label(&self) -> &'static str {
        "rocSPARSE"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[ROCSPARSE]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [rocsparse] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("rocSPARSE: Create Handle", || {
            ScopedHandle::create(rocsparse, "rocsparse_create_handle", "rocsparse_destroy_handle")
                .map(|handle| (handle, None))
        })
        .query("rocSPARSE: Get Version", |handle| {
            handle_version_int(rocsparse, handle, "rocsparse_get_version")
                .map(|v| Some(format!("Version: {}", v)))
        })
        .run(results);
    }
}

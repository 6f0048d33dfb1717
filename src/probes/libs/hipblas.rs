//! hipBLAS probe.

use crate::probes::handle::ScopedHandle;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The hipBLAS library.
pub const HIPBLAS: LibrarySpec = LibrarySpec {
    name: "hipBLAS",
    stem: "hipblas",
    versions: &["3", "2", "1"],
};

/// Creates and destroys a handle.
pub struct HipblasProbe;

impl Probe for HipblasProbe {
    fn id(&self) -> &'static str {
        "hipblas"
    }

    fn label(&self) -> &'static str {
        "hipBLAS"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[HIPBLAS]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [hipblas] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("hipBLAS: Create Handle", || {
            ScopedHandle::create(hipblas, "hipblasCreate", "hipblasDestroy")
                .map(|handle| (handle, None))
        })
        .run(results);
    }
}

//! hipSOLVER probe.

use crate::probes::handle::ScopedHandle;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The hipSOLVER library.
pub const HIPSOLVER: LibrarySpec = LibrarySpec {
    name: "hipSOLVER",
    stem: "hipsolver",
    versions: &["1", "0"],
};

/// Creates and destroys a handle.
pub struct HipsolverProbe;

impl Probe for HipsolverProbe {
    fn id(&self) -> &'static str {
        "hipsolver"
    }

    fn label(&self) -> &'static str {
        "hipSOLVER"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[HIPSOLVER]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [hipsolver] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("hipSOLVER: Create Handle", || {
            ScopedHandle::create(hipsolver, "hipsolverCreate", "hipsolverDestroy")
                .map(|handle| (handle, None))
        })
        .run(results);
    }
}

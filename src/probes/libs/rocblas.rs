//! rocBLAS probe.

use crate::probes::handle::{version_string, ScopedHandle};
use crate::probes::lifecycle::{Lifecycle, StepError};
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The rocBLAS library. rocSOLVER borrows its handles too.
pub const ROCBLAS: LibrarySpec = LibrarySpec {
    name: "rocBLAS",
    stem: "rocblas",
    versions: &["5", "4", "3"],
};

/// Creates a handle and reads the library version.
pub struct RocblasProbe;

impl Probe for RocblasProbe {
    fn id(&self) -> &'static str {
        "rocblas"
    }

    fn label(&self) -> &'static str {
        "rocBLAS"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[ROCBLAS]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [rocblas] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("rocBLAS: Create Handle", || {
            create_handle(rocblas).map(|handle| (handle, None))
        })
        .query("rocBLAS: Get Version", |_| {
            version_string(rocblas, "rocblas_get_version_string")
                .map(|v| Some(format!("Version: {}", v)))
        })
        .run(results);
    }
}

/// Create a `rocblas_handle`.
pub fn create_handle(rocblas: &VendorLibrary) -> Result<ScopedHandle<'_>, StepError> {
    ScopedHandle::create(rocblas, "rocblas_create_handle", "rocblas_destroy_handle")
}

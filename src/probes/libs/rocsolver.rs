//! rocSOLVER probe.
//!
//! rocSOLVER has no handle type of its own; it operates on rocBLAS handles,
//! so both libraries must load before the probe runs.

use crate::probes::handle::version_string;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

use super::rocblas::{create_handle, ROCBLAS};

/// The rocSOLVER library.
pub const ROCSOLVER: LibrarySpec = LibrarySpec {
    name: "rocSOLVER",
    stem: "rocsolver",
    versions: &["0"],
};

/// Creates a rocBLAS handle and reads the rocSOLVER version.
pub struct RocsolverProbe;

impl Probe for RocsolverProbe {
    fn id(&self) -> &'static str {
        "rocsolver"
    }

    fn label(&self) -> &'static str {
        "rocSOLVER"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[ROCSOLVER, ROCBLAS]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [rocsolver, rocblas] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("rocSOLVER: Use rocBLAS Handle", || {
            create_handle(rocblas).map(|handle| (handle, None))
        })
        .query("rocSOLVER: Get Version", |_| {
            version_string(rocsolver, "rocsolver_get_version_string")
                .map(|v| Some(format!("Version: {}", v)))
        })
        .run(results);
    }
}

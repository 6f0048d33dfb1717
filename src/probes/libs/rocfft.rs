//! rocFFT probe.

use crate::probes::handle::version_string;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The rocFFT library.
pub const ROCFFT: LibrarySpec = LibrarySpec {
    name: "rocFFT",
    stem: "rocfft",
    versions: &["0"],
};

/// Reads the library version string.
pub struct RocfftProbe;

impl Probe for RocfftProbe {
    fn id(&self) -> &'static str {
        "rocfft"
    }

    fn label(&self) -> &'static str {
        "rocFFT"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[ROCFFT]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [rocfft] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::stateless()
            .query("rocFFT: Get Version", |_| {
                version_string(rocfft, "rocfft_get_version_string")
                    .map(|v| Some(format!("Version: {}", v)))
            })
            .run(results);
    }
}

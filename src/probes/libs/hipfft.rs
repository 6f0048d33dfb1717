//! hipFFT probe.

use crate::probes::handle::version_int;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The hipFFT library.
pub const HIPFFT: LibrarySpec = LibrarySpec {
    name: "hipFFT",
    stem: "hipfft",
    versions: &["0"],
};

/// Reads the numeric library version.
pub struct HipfftProbe;

impl Probe for HipfftProbe {
    fn id(&self) -> &'static str {
        "hipfft"
    }

    fn label(&self) -> &'static str {
        "hipFFT"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[HIPFFT]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [hipfft] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::stateless()
            .query("hipFFT: Get Version", |_| {
                version_int(hipfft, "hipfftGetVersion").map(|v| Some(format!("Version: {}", v)))
            })
            .run(results);
    }
}

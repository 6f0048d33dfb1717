//! rocRAND probe.

use crate::probes::handle::version_int;
use crate::probes::lifecycle::Lifecycle;
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The rocRAND library.
pub const ROCRAND: LibrarySpec = LibrarySpec {
    name: "rocRAND",
    stem: "rocrand",
    versions: &["1"],
};

/// Reads the numeric library version.
pub struct RocrandProbe;

impl Probe for RocrandProbe {
    fn id(&self) -> &'static str {
        "rocrand"
    }

    fn label(&self) -> &'static str {
        "rocRAND"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[ROCRAND]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [rocrand] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::stateless()
            .query("rocRAND: Get Version", |_| {
                version_int(rocrand, "rocrand_get_version").map(|v| Some(format!("Version: {}", v)))
            })
            .run(results);
    }
}

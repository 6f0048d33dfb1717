//! MIOpen probe.

use std::os::raw::c_int;

use crate::probes::handle::ScopedHandle;
use crate::probes::lifecycle::{check_status, Lifecycle, StepError};
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The MIOpen library.
pub const MIOPEN: LibrarySpec = LibrarySpec {
    name: "MIOpen",
    stem: "MIOpen",
    versions: &["1"],
};

type GetVersionFn = unsafe extern "C" fn(*mut usize, *mut usize, *mut usize) -> c_int;

/// Creates a handle and reads the three-part version.
pub struct MiopenProbe;

impl Probe for MiopenProbe {
    fn id(&self) -> &'static str {
        "miopen"
    }

    fn label(&self) -> &'static str {
        "MIOpen"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[MIOPEN]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [miopen] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("MIOpen: Create Handle", || {
            ScopedHandle::create(miopen, "miopenCreate", "miopenDestroy").map(|handle| (handle, None))
        })
        .query("MIOpen: Get Version", |_| {
            version(miopen).map(|(major, minor, patch)| {
                Some(format!("Version: {}.{}.{}", major, minor, patch))
            })
        })
        .run(results);
    }
}

fn version(miopen: &VendorLibrary) -> Result<(usize, usize, usize), StepError> {
    const CALL: &str = "miopenGetVersion";
    // SAFETY: signature matches `miopenStatus_t miopenGetVersion(size_t*, size_t*, size_t*)`.
    let get = unsafe { miopen.symbol::<GetVersionFn>(CALL)? };
    let (mut major, mut minor, mut patch) = (0usize, 0usize, 0usize);
    // SAFETY: all three out-pointers are valid for the call.
    check_status(CALL, unsafe { get(&mut major, &mut minor, &mut patch) })?;
    Ok((major, minor, patch))
}

//! HIP runtime probe.
//!
//! HIP has no handle: the device count doubles as the setup value, and the
//! name of device 0 is only queried when at least one device exists.

use std::os::raw::{c_char, c_int};

use crate::probes::handle::{c_buffer_to_string, VERSION_BUFFER_LEN};
use crate::probes::lifecycle::{check_hip, Lifecycle, StepError};
use crate::probes::loader::{LibrarySpec, VendorLibrary};
use crate::probes::{unexpected_libraries, Probe};
use crate::results::TestResults;

/// The HIP runtime library.
pub const AMDHIP64: LibrarySpec = LibrarySpec {
    name: "HIP",
    stem: "amdhip64",
    versions: &["7", "6", "5"],
};

type GetDeviceCountFn = unsafe extern "C" fn(*mut c_int) -> c_int;
type DeviceGetNameFn = unsafe extern "C" fn(*mut c_char, c_int, c_int) -> c_int;

/// Counts devices and reads the name of the first one.
pub struct HipProbe;

impl Probe for HipProbe {
    fn id(&self) -> &'static str {
        "hip"
    }

    fn label(&self) -> &'static str {
        "HIP"
    }

    fn libraries(&self) -> &'static [LibrarySpec] {
        &[AMDHIP64]
    }

    fn run(&self, libraries: &[VendorLibrary], results: &mut TestResults) {
        let [hip] = libraries else {
            return unexpected_libraries(self, libraries, results);
        };

        Lifecycle::new("HIP: Get Device Count", || {
            let count = device_count(hip)?;
            Ok((count, Some(format!("Found {} device(s)", count))))
        })
        .query_when(
            |count| *count > 0,
            "HIP: Get Device Properties",
            |_| device_name(hip, 0).map(|name| Some(format!("Device: {}", name))),
        )
        .run(results);
    }
}

fn device_count(hip: &VendorLibrary) -> Result<i32, StepError> {
    const CALL: &str = "hipGetDeviceCount";
    // SAFETY: signature matches `hipError_t hipGetDeviceCount(int*)`.
    let get = unsafe { hip.symbol::<GetDeviceCountFn>(CALL)? };
    let mut count: c_int = 0;
    // SAFETY: `count` is a valid out-pointer.
    check_hip(CALL, unsafe { get(&mut count) })?;
    Ok(count)
}

fn device_name(hip: &VendorLibrary, device: c_int) -> Result<String, StepError> {
    const CALL: &str = "hipDeviceGetName";
    // SAFETY: signature matches `hipError_t hipDeviceGetName(char*, int, hipDevice_t)`.
    let get = unsafe { hip.symbol::<DeviceGetNameFn>(CALL)? };
    let mut buf = [0 as c_char; VERSION_BUFFER_LEN];
    // SAFETY: `buf` is writable for the length passed.
    check_hip(CALL, unsafe {
        get(buf.as_mut_ptr(), VERSION_BUFFER_LEN as c_int, device)
    })?;
    Ok(c_buffer_to_string(&buf))
}

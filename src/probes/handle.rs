//! RAII wrappers and call helpers for vendor C APIs.
//!
//! Handles obtained from a vendor library are wrapped in [`ScopedHandle`]
//! (or [`ScopedSession`] for init/shutdown pairs) so that the matching
//! release call runs when the wrapper is dropped, on every path.
//!
//! The release entry point is resolved *before* the acquire call. A library
//! that exports a create function but no destroy function is reported as a
//! failed setup instead of leaking the handle.

use std::ffi::c_void;
use std::os::raw::{c_char, c_int};

use tracing::{debug, warn};

use super::lifecycle::{check_status, StepError};
use super::loader::{Export, VendorLibrary};

/// Opaque vendor handle (`rocblas_handle`, `hipblasHandle_t`, ...).
pub type RawHandle = *mut c_void;

/// `status create(handle_t* out)`
pub type CreateFn = unsafe extern "C" fn(*mut RawHandle) -> c_int;

/// `status destroy(handle_t handle)`
pub type DestroyFn = unsafe extern "C" fn(RawHandle) -> c_int;

/// `status fn(void)`, used for init/shutdown pairs.
pub type SessionFn = unsafe extern "C" fn() -> c_int;

/// `status get_version_string(char* buf, size_t len)`
pub type VersionStringFn = unsafe extern "C" fn(*mut c_char, usize) -> c_int;

/// `status get_version(int* version)`
pub type VersionIntFn = unsafe extern "C" fn(*mut c_int) -> c_int;

/// `status get_version(handle_t handle, int* version)`
pub type HandleVersionFn = unsafe extern "C" fn(RawHandle, *mut c_int) -> c_int;

/// Buffer size handed to `*_get_version_string` calls.
pub const VERSION_BUFFER_LEN: usize = 256;

/// A vendor handle released through its destroy function on drop.
pub struct ScopedHandle<'lib> {
    library: &'static str,
    raw: RawHandle,
    destroy: Export<'lib, DestroyFn>,
}

impl<'lib> ScopedHandle<'lib> {
    /// Create a handle with `create` and arrange for `destroy` on drop.
    pub fn create(
        library: &'lib VendorLibrary,
        create: &'static str,
        destroy: &'static str,
    ) -> Result<Self, StepError> {
        // SAFETY: both symbols follow the CreateFn/DestroyFn conventions
        // shared by the ROCm handle APIs.
        let create_fn = unsafe { library.symbol::<CreateFn>(create)? };
        let destroy_fn = unsafe { library.symbol::<DestroyFn>(destroy)? };

        let mut raw: RawHandle = std::ptr::null_mut();
        // SAFETY: `raw` is a valid out-pointer for the duration of the call.
        let status = unsafe { create_fn(&mut raw) };
        check_status(create, status)?;
        debug!(library = library.name(), call = create, "created handle");

        Ok(Self {
            library: library.name(),
            raw,
            destroy: destroy_fn,
        })
    }

    /// The raw handle, valid while `self` is alive.
    pub fn raw(&self) -> RawHandle {
        self.raw
    }
}

impl Drop for ScopedHandle<'_> {
    fn drop(&mut self) {
        // SAFETY: `raw` came from the matching create call and is released once.
        let status = unsafe { (self.destroy)(self.raw) };
        if status == 0 {
            debug!(library = self.library, "released handle");
        } else {
            warn!(library = self.library, status, "failed to release handle");
        }
    }
}

/// A library-wide session opened by an init call and closed by a shutdown call.
pub struct ScopedSession<'lib> {
    library: &'static str,
    shut_down: Export<'lib, SessionFn>,
}

impl<'lib> ScopedSession<'lib> {
    /// Call `init` and arrange for `shut_down` on drop.
    pub fn open(
        library: &'lib VendorLibrary,
        init: &'static str,
        shut_down: &'static str,
    ) -> Result<Self, StepError> {
        // SAFETY: both symbols take no arguments and return a status code.
        let init_fn = unsafe { library.symbol::<SessionFn>(init)? };
        let shut_down_fn = unsafe { library.symbol::<SessionFn>(shut_down)? };

        // SAFETY: no arguments.
        let status = unsafe { init_fn() };
        check_status(init, status)?;
        debug!(library = library.name(), call = init, "session opened");

        Ok(Self {
            library: library.name(),
            shut_down: shut_down_fn,
        })
    }
}

impl Drop for ScopedSession<'_> {
    fn drop(&mut self) {
        // SAFETY: the session was opened by a successful init call.
        let status = unsafe { (self.shut_down)() };
        if status == 0 {
            debug!(library = self.library, "session closed");
        } else {
            warn!(library = self.library, status, "failed to close session");
        }
    }
}

/// Call a `get_version_string(char*, size_t)` entry point.
pub fn version_string(library: &VendorLibrary, call: &'static str) -> Result<String, StepError> {
    // SAFETY: signature matches VersionStringFn.
    let get = unsafe { library.symbol::<VersionStringFn>(call)? };
    let mut buf = [0 as c_char; VERSION_BUFFER_LEN];
    // SAFETY: `buf` is writable for `buf.len()` bytes.
    let status = unsafe { get(buf.as_mut_ptr(), buf.len()) };
    check_status(call, status)?;
    Ok(c_buffer_to_string(&buf))
}

/// Call a `get_version(int*)` entry point.
pub fn version_int(library: &VendorLibrary, call: &'static str) -> Result<i32, StepError> {
    // SAFETY: signature matches VersionIntFn.
    let get = unsafe { library.symbol::<VersionIntFn>(call)? };
    let mut version: c_int = 0;
    // SAFETY: `version` is a valid out-pointer.
    let status = unsafe { get(&mut version) };
    check_status(call, status)?;
    Ok(version)
}

/// Call a `get_version(handle, int*)` entry point.
pub fn handle_version_int(
    library: &VendorLibrary,
    handle: &ScopedHandle<'_>,
    call: &'static str,
) -> Result<i32, StepError> {
    // SAFETY: signature matches HandleVersionFn.
    let get = unsafe { library.symbol::<HandleVersionFn>(call)? };
    let mut version: c_int = 0;
    // SAFETY: the handle is alive and `version` is a valid out-pointer.
    let status = unsafe { get(handle.raw(), &mut version) };
    check_status(call, status)?;
    Ok(version)
}

/// Convert a NUL-terminated C buffer to a trimmed `String`.
///
/// Stops at the first NUL or at the end of the buffer if there is none.
pub fn c_buffer_to_string(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).trim().to_string()
}

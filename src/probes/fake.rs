//! Vendor entry points implemented in Rust, for exercising the FFI paths
//! without a ROCm installation.
//!
//! State is thread-local so tests running in parallel do not interfere.
//! Every test should call [`reset`] first.

use std::cell::Cell;
use std::ffi::c_void;
use std::os::raw::{c_char, c_int};

use super::handle::{
    CreateFn, DestroyFn, HandleVersionFn, RawHandle, SessionFn, VersionIntFn, VersionStringFn,
};
use super::loader::VendorLibrary;

/// Version string written by [`version_string`].
pub const VERSION: &str = "4.2.0.fake";

/// Version number written by [`version_int`] and [`handle_version_int`].
pub const VERSION_NUMBER: c_int = 300_100;

const FAKE_HANDLE: usize = 0x5eed;

/// Calls observed since the last [`reset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calls {
    pub creates: usize,
    pub destroys: usize,
    pub inits: usize,
    pub shutdowns: usize,
}

thread_local! {
    static CALLS: Cell<Calls> = Cell::new(Calls::default());
    static CREATE_STATUS: Cell<c_int> = const { Cell::new(0) };
    static INIT_STATUS: Cell<c_int> = const { Cell::new(0) };
    static VERSION_STATUS: Cell<c_int> = const { Cell::new(0) };
    static DEVICES: Cell<c_int> = const { Cell::new(0) };
}

/// Clear counters and make every call succeed.
pub fn reset() {
    CALLS.with(|c| c.set(Calls::default()));
    CREATE_STATUS.with(|s| s.set(0));
    INIT_STATUS.with(|s| s.set(0));
    VERSION_STATUS.with(|s| s.set(0));
    DEVICES.with(|d| d.set(0));
}

pub fn calls() -> Calls {
    CALLS.with(Cell::get)
}

pub fn fail_create(status: c_int) {
    CREATE_STATUS.with(|s| s.set(status));
}

pub fn fail_init(status: c_int) {
    INIT_STATUS.with(|s| s.set(status));
}

pub fn fail_version(status: c_int) {
    VERSION_STATUS.with(|s| s.set(status));
}

pub fn set_devices(count: c_int) {
    DEVICES.with(|d| d.set(count));
}

fn bump(f: impl FnOnce(&mut Calls)) {
    CALLS.with(|c| {
        let mut calls = c.get();
        f(&mut calls);
        c.set(calls);
    });
}

/// `status create(handle_t*)`
pub unsafe extern "C" fn create(out: *mut RawHandle) -> c_int {
    bump(|c| c.creates += 1);
    let status = CREATE_STATUS.with(Cell::get);
    if status == 0 {
        *out = FAKE_HANDLE as RawHandle;
    }
    status
}

/// `status destroy(handle_t)`
pub unsafe extern "C" fn destroy(handle: RawHandle) -> c_int {
    assert_eq!(handle as usize, FAKE_HANDLE, "destroy called with a foreign handle");
    bump(|c| c.destroys += 1);
    0
}

/// `status init(void)`
pub unsafe extern "C" fn init() -> c_int {
    bump(|c| c.inits += 1);
    INIT_STATUS.with(Cell::get)
}

/// `status shut_down(void)`
pub unsafe extern "C" fn shut_down() -> c_int {
    bump(|c| c.shutdowns += 1);
    0
}

/// `status get_version_string(char*, size_t)`
pub unsafe extern "C" fn version_string(buf: *mut c_char, len: usize) -> c_int {
    let status = VERSION_STATUS.with(Cell::get);
    if status == 0 {
        let bytes = VERSION.as_bytes();
        let n = bytes.len().min(len.saturating_sub(1));
        for (i, b) in bytes.iter().take(n).enumerate() {
            *buf.add(i) = *b as c_char;
        }
        *buf.add(n) = 0;
    }
    status
}

/// `status get_version(int*)`
pub unsafe extern "C" fn version_int(out: *mut c_int) -> c_int {
    let status = VERSION_STATUS.with(Cell::get);
    if status == 0 {
        *out = VERSION_NUMBER;
    }
    status
}

/// `status get_version(handle_t, int*)`
pub unsafe extern "C" fn handle_version_int(handle: RawHandle, out: *mut c_int) -> c_int {
    assert_eq!(handle as usize, FAKE_HANDLE, "version queried on a foreign handle");
    version_int(out)
}

/// `hipError_t hipGetDeviceCount(int*)`
pub unsafe extern "C" fn device_count(out: *mut c_int) -> c_int {
    *out = DEVICES.with(Cell::get);
    0
}

/// `hipError_t hipDeviceGetName(char*, int, int)`
pub unsafe extern "C" fn device_name(buf: *mut c_char, len: c_int, _device: c_int) -> c_int {
    let name = b"Fake GPU";
    let n = name.len().min((len.max(1) - 1) as usize);
    for (i, b) in name.iter().take(n).enumerate() {
        *buf.add(i) = *b as c_char;
    }
    *buf.add(n) = 0;
    0
}

/// One named entry point for [`library`].
pub enum Entry {
    Create(CreateFn),
    Destroy(DestroyFn),
    Session(SessionFn),
    VersionString(VersionStringFn),
    VersionInt(VersionIntFn),
    HandleVersion(HandleVersionFn),
    DeviceName(unsafe extern "C" fn(*mut c_char, c_int, c_int) -> c_int),
}

impl Entry {
    fn address(self) -> *const c_void {
        match self {
            Entry::Create(f) => f as *const c_void,
            Entry::Destroy(f) => f as *const c_void,
            Entry::Session(f) => f as *const c_void,
            Entry::VersionString(f) => f as *const c_void,
            Entry::VersionInt(f) => f as *const c_void,
            Entry::HandleVersion(f) => f as *const c_void,
            Entry::DeviceName(f) => f as *const c_void,
        }
    }
}

/// A library exporting `entries` under the given symbol names.
pub fn library(name: &'static str, entries: Vec<(&'static str, Entry)>) -> VendorLibrary {
    VendorLibrary::in_process(
        name,
        entries
            .into_iter()
            .map(|(symbol, entry)| (symbol, entry.address()))
            .collect(),
    )
}

/// A library exporting the standard handle trio under the given names.
pub fn handle_library(
    name: &'static str,
    create_symbol: &'static str,
    destroy_symbol: &'static str,
    version_symbol: &'static str,
) -> VendorLibrary {
    library(
        name,
        vec![
            (create_symbol, Entry::Create(create)),
            (destroy_symbol, Entry::Destroy(destroy)),
            (version_symbol, Entry::HandleVersion(handle_version_int)),
        ],
    )
}

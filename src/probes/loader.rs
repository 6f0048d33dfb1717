//! Runtime discovery and loading of vendor libraries.
//!
//! Each vendor library is described by a [`LibrarySpec`]: a display name,
//! the file stem and the ABI versions worth trying. The [`LibraryLocator`]
//! turns a spec into candidate paths (configured search directories first,
//! then bare file names resolved by the system loader) and opens the first
//! one that loads.

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
#[cfg(test)]
use std::ffi::c_void;
use std::marker::PhantomData;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::{debug, trace};

use crate::error::{Result, SmokeError};

/// Static description of a loadable vendor library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibrarySpec {
    /// Display name (e.g. "rocBLAS").
    pub name: &'static str,
    /// File stem without platform prefix or suffix (e.g. "rocblas").
    pub stem: &'static str,
    /// ABI versions to try after the unversioned name, newest first.
    pub versions: &'static [&'static str],
}

impl LibrarySpec {
    /// Platform file names to try, in order.
    ///
    /// On Linux this yields `librocblas.so` followed by `librocblas.so.5`
    /// and so on; on Windows `rocblas.dll` followed by `rocblas_5.dll`.
    pub fn file_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.versions.len() + 1);
        names.push(format!("{}{}{}", DLL_PREFIX, self.stem, DLL_SUFFIX));
        for version in self.versions {
            if cfg!(windows) {
                names.push(format!("{}_{}{}", self.stem, version, DLL_SUFFIX));
            } else {
                names.push(format!("{}{}{}.{}", DLL_PREFIX, self.stem, DLL_SUFFIX, version));
            }
        }
        names
    }
}

/// A vendor library that has been opened successfully.
///
/// The library stays loaded until this value is dropped, so every
/// [`Export`] borrowed from it is bound to its lifetime.
#[derive(Debug)]
pub struct VendorLibrary {
    name: &'static str,
    path: PathBuf,
    image: Image,
}

#[derive(Debug)]
enum Image {
    Loaded(Library),
    /// Entry points living in the current binary, keyed by symbol name.
    #[cfg(test)]
    InProcess(Vec<(&'static str, *const c_void)>),
}

/// An entry point resolved from a [`VendorLibrary`].
///
/// Dereferences to the function pointer. Cannot outlive the library.
pub struct Export<'lib, T> {
    func: T,
    _library: PhantomData<&'lib VendorLibrary>,
}

impl<T> Deref for Export<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.func
    }
}

impl VendorLibrary {
    /// Display name of the library.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The path or file name the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A library whose entry points are functions in the current binary.
    #[cfg(test)]
    pub(crate) fn in_process(
        name: &'static str,
        exports: Vec<(&'static str, *const c_void)>,
    ) -> Self {
        Self {
            name,
            path: PathBuf::from(format!("<in-process {}>", name)),
            image: Image::InProcess(exports),
        }
    }

    /// Look up an exported function.
    ///
    /// # Safety
    ///
    /// `T` must be a function pointer type matching the C signature of the
    /// exported symbol.
    pub unsafe fn symbol<T: Copy>(&self, symbol: &str) -> Result<Export<'_, T>> {
        trace!(library = self.name, symbol, "resolving symbol");
        let func = match &self.image {
            Image::Loaded(library) => library
                .get::<T>(symbol.as_bytes())
                .map(|found| *found)
                .map_err(|e| e.to_string()),
            #[cfg(test)]
            Image::InProcess(exports) => exports
                .iter()
                .find(|(name, _)| *name == symbol)
                .map(|(_, ptr)| std::mem::transmute_copy::<*const c_void, T>(ptr))
                .ok_or_else(|| "not exported".to_string()),
        };

        func.map(|func| Export {
            func,
            _library: PhantomData,
        })
        .map_err(|message| SmokeError::SymbolNotFound {
            library: self.name.to_string(),
            symbol: symbol.to_string(),
            message,
        })
    }
}

/// Finds and opens vendor libraries.
#[derive(Debug, Clone, Default)]
pub struct LibraryLocator {
    search_dirs: Vec<PathBuf>,
}

impl LibraryLocator {
    /// Create a locator that searches `search_dirs` before the system loader path.
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Create a locator that only uses the system loader path.
    pub fn system() -> Self {
        Self::default()
    }

    /// Directories searched before the system loader path.
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// All paths that would be tried for `spec`, in order.
    ///
    /// Search directories are walked in order and every candidate name is
    /// tried in each before moving on. Files inside search directories are
    /// only listed when they exist; bare file names are always listed and
    /// left to the system loader.
    pub fn candidate_paths(&self, spec: &LibrarySpec) -> Vec<PathBuf> {
        let names = spec.file_names();
        let mut paths = Vec::new();
        for dir in &self.search_dirs {
            for name in &names {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    paths.push(candidate);
                }
            }
        }
        paths.extend(names.into_iter().map(PathBuf::from));
        paths
    }

    /// Open the first candidate for `spec` that loads.
    pub fn open(&self, spec: &LibrarySpec) -> Result<VendorLibrary> {
        for path in self.candidate_paths(spec) {
            // SAFETY: loading runs the library's initialisers; vendor
            // libraries are trusted parts of the installation under test.
            match unsafe { Library::new(&path) } {
                Ok(library) => {
                    debug!(library = spec.name, path = %path.display(), "loaded library");
                    return Ok(VendorLibrary {
                        name: spec.name,
                        path,
                        image: Image::Loaded(library),
                    });
                }
                Err(e) => trace!(library = spec.name, path = %path.display(), "load failed: {}", e),
            }
        }

        Err(SmokeError::LibraryNotFound {
            library: spec.name.to_string(),
            tried: spec.file_names().join(", "),
        })
    }
}

//! Harness configuration.
//!
//! There are no configuration files. Everything the harness needs is taken
//! from command-line arguments, with `ROCM_PATH` accepted as the
//! environment fallback for `--rocm-path` (handled by clap).
//!
//! Running without any arguments yields the default configuration: the
//! standard probe sequence, libraries resolved through the system loader.
//!
//! # Example
//!
//! ```
//! use rocm_smoke::config::HarnessConfig;
//! use std::path::PathBuf;
//!
//! let config = HarnessConfig {
//!     rocm_path: Some(PathBuf::from("/opt/rocm")),
//!     ..Default::default()
//! };
//! assert_eq!(config.search_dirs()[0], PathBuf::from("/opt/rocm/lib"));
//! ```

use std::path::PathBuf;

use crate::cli::args::{Cli, RunArgs};
use crate::probes::LibraryLocator;

/// Library directories under a ROCm installation root, in search order.
pub const ROCM_LIB_SUBDIRS: &[&str] = &["lib", "lib64"];

/// Where to look for vendor libraries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// ROCm installation root (`--rocm-path` / `ROCM_PATH`).
    pub rocm_path: Option<PathBuf>,
    /// Extra library directories (`--lib-dir`), searched after the ROCm root.
    pub lib_dirs: Vec<PathBuf>,
}

/// Which probes to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSelection {
    /// Run only these probe ids (all if empty).
    pub only: Vec<String>,
    /// Skip these probe ids.
    pub skip: Vec<String>,
    /// Include the extended probes.
    pub extended: bool,
}

impl HarnessConfig {
    /// Build the configuration from parsed global arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            rocm_path: cli.rocm_path.clone(),
            lib_dirs: cli.lib_dir.clone(),
        }
    }

    /// Directories searched before the system loader path.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self
            .rocm_path
            .iter()
            .flat_map(|root| ROCM_LIB_SUBDIRS.iter().map(move |sub| root.join(sub)))
            .collect();
        dirs.extend(self.lib_dirs.iter().cloned());
        dirs
    }

    /// A locator over [`HarnessConfig::search_dirs`].
    pub fn locator(&self) -> LibraryLocator {
        LibraryLocator::new(self.search_dirs())
    }
}

impl From<&RunArgs> for ProbeSelection {
    fn from(args: &RunArgs) -> Self {
        Self {
            only: args.only.clone(),
            skip: args.skip.clone(),
            extended: args.extended,
        }
    }
}

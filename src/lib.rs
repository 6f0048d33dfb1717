//! rocm-smoke - Runtime smoke tests for installed ROCm packages.
//!
//! Each ROCm library is probed by loading it at runtime, creating the
//! context or handle its API requires, asking it a few cheap questions
//! (device count, version) and releasing everything again. A missing
//! library is a recorded failure, never a crash.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Library search configuration and probe selection
//! - [`error`] - Error types and result aliases
//! - [`probes`] - Library loading, scoped vendor handles and the probes
//! - [`results`] - Outcome collection, summary and exit code
//! - [`ui`] - Banner, running log, spinners and terminal output
//!
//! # Example
//!
//! ```
//! use rocm_smoke::results::TestResults;
//!
//! let mut results = TestResults::new();
//! results.add_test("HIP: Get Device Count", true, "Found 1 device(s)");
//! results.add_test("rocFFT: Get Version", false, "rocfft_get_version_string failed with status 1");
//!
//! assert_eq!(results.total(), 2);
//! assert_eq!(results.exit_code(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod results;
pub mod ui;

pub use error::{Result, SmokeError};

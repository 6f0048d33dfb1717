//! Test outcome collection and reporting.
//!
//! Probes record named pass/fail outcomes into a shared [`TestResults`]
//! collector. After all probes have run the collector renders the summary
//! block and decides the process exit code.
//!
//! # Modules
//!
//! - [`outcome`] - A single recorded pass/fail outcome
//! - [`collector`] - The ordered collector, summary rendering and exit code

pub mod collector;
pub mod outcome;

pub use collector::{Summary, TestResults};
pub use outcome::TestOutcome;

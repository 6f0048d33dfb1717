//! Uniform execution of a probe's lifecycle.
//!
//! A [`Lifecycle`] describes what one probe does once its libraries are
//! loaded: an optional setup step producing a value (usually an RAII handle
//! from [`super::handle`]), followed by queries against that value. Every
//! step that runs records exactly one outcome.
//!
//! Ordering guarantees:
//!
//! - If setup fails, one failing outcome is recorded and nothing else runs.
//!   No value exists, so nothing is released.
//! - Queries run in order; a failing query does not stop later queries.
//! - The setup value is dropped after the last query, which releases any
//!   vendor handle it owns regardless of how the queries went.

use std::os::raw::c_int;

use thiserror::Error;
use tracing::debug;

use crate::error::SmokeError;
use crate::results::TestResults;

/// Why a single lifecycle step failed.
#[derive(Debug, Error)]
pub enum StepError {
    /// A vendor call returned a non-success status.
    #[error("{call} failed with status {code}")]
    Status { call: &'static str, code: i32 },

    /// A HIP runtime call returned a non-success `hipError_t`.
    #[error("{call} failed with error {code}")]
    HipError { call: &'static str, code: i32 },

    /// The harness could not perform the call (e.g. missing symbol).
    #[error(transparent)]
    Harness(#[from] SmokeError),
}

/// Map a vendor status code to a step result. Every ROCm library uses 0 for success.
pub fn check_status(call: &'static str, code: c_int) -> Result<(), StepError> {
    if code == 0 {
        Ok(())
    } else {
        Err(StepError::Status { call, code })
    }
}

/// Like [`check_status`], for `hipError_t` results.
pub fn check_hip(call: &'static str, code: c_int) -> Result<(), StepError> {
    if code == 0 {
        Ok(())
    } else {
        Err(StepError::HipError { call, code })
    }
}

/// Result of a query: an optional message for a passing outcome.
pub type StepResult = Result<Option<String>, StepError>;

type SetupFn<'a, H> = Box<dyn FnOnce() -> Result<(H, Option<String>), StepError> + 'a>;
type QueryFn<'a, H> = Box<dyn Fn(&H) -> StepResult + 'a>;
type GuardFn<'a, H> = Box<dyn Fn(&H) -> bool + 'a>;

enum Setup<'a, H> {
    Ready(H),
    Step { name: String, run: SetupFn<'a, H> },
}

struct Query<'a, H> {
    name: String,
    applies: GuardFn<'a, H>,
    run: QueryFn<'a, H>,
}

/// Setup step plus queries for one probe.
pub struct Lifecycle<'a, H> {
    setup: Setup<'a, H>,
    queries: Vec<Query<'a, H>>,
}

impl<'a> Lifecycle<'a, ()> {
    /// A lifecycle without a handle; only queries are recorded.
    pub fn stateless() -> Self {
        Self {
            setup: Setup::Ready(()),
            queries: Vec::new(),
        }
    }
}

impl<'a, H> Lifecycle<'a, H> {
    /// A lifecycle whose setup step is recorded under `name`.
    ///
    /// On success the setup returns the value handed to every query and an
    /// optional message for its own passing outcome.
    pub fn new<F>(name: impl Into<String>, setup: F) -> Self
    where
        F: FnOnce() -> Result<(H, Option<String>), StepError> + 'a,
    {
        Self {
            setup: Setup::Step {
                name: name.into(),
                run: Box::new(setup),
            },
            queries: Vec::new(),
        }
    }

    /// Add a query recorded under `name`.
    pub fn query<F>(self, name: impl Into<String>, run: F) -> Self
    where
        F: Fn(&H) -> StepResult + 'a,
    {
        self.query_when(|_| true, name, run)
    }

    /// Add a query that only runs (and is only recorded) when `applies` holds.
    pub fn query_when<P, F>(mut self, applies: P, name: impl Into<String>, run: F) -> Self
    where
        P: Fn(&H) -> bool + 'a,
        F: Fn(&H) -> StepResult + 'a,
    {
        self.queries.push(Query {
            name: name.into(),
            applies: Box::new(applies),
            run: Box::new(run),
        });
        self
    }

    /// Run every step, recording one outcome per executed step.
    pub fn run(self, results: &mut TestResults) {
        let value = match self.setup {
            Setup::Ready(value) => value,
            Setup::Step { name, run } => match run() {
                Ok((value, message)) => {
                    debug!(step = %name, "setup succeeded");
                    record_success(results, name, message);
                    value
                }
                Err(e) => {
                    debug!(step = %name, "setup failed: {}", e);
                    results.fail(name, e.to_string());
                    return;
                }
            },
        };

        for query in &self.queries {
            if !(query.applies)(&value) {
                debug!(step = %query.name, "query not applicable");
                continue;
            }
            match (query.run)(&value) {
                Ok(message) => record_success(results, query.name.clone(), message),
                Err(e) => results.fail(query.name.clone(), e.to_string()),
            }
        }

        drop(value);
    }
}

fn record_success(results: &mut TestResults, name: String, message: Option<String>) {
    match message {
        Some(message) => results.add_test(name, true, message),
        None => results.pass(name),
    }
}

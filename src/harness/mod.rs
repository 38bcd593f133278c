//! Test invocation harness
//!
//! Builds a fixture for a test case, hands it to the test body, and
//! classifies the result: a pass, a setup failure (resolution broke before
//! the function under test ran), or a check failure (post-invocation
//! verification did not hold). Setup failures are never retried. Domain
//! errors are surfaced to the body for explicit assertion; an unexpected one
//! bubbling out counts as a failed check.
//!
//! Bodies return `anyhow::Result<()>`, so `?` works on setup errors and
//! domain errors alike and `ensure!`/`bail!` express the checks.

use std::future::Future;
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::SetupError;
use crate::specimen::{Fixture, FixtureBuilder};

/// How a single invocation ended
#[derive(Debug)]
pub enum Outcome {
    Passed,
    /// Resolution failed before the function under test ran
    SetupFailed(SetupError),
    /// Post-invocation verification did not hold
    CheckFailed(anyhow::Error),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Panic with the failure detail unless the invocation passed
    #[track_caller]
    pub fn assert_passed(&self) {
        match self {
            Outcome::Passed => {}
            Outcome::SetupFailed(err) => panic!("setup failed: {err}"),
            Outcome::CheckFailed(err) => panic!("check failed: {err:#}"),
        }
    }
}

fn classify(result: anyhow::Result<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::Passed,
        Err(err) => match err.downcast::<SetupError>() {
            Ok(setup) => {
                tracing::warn!(error = %setup, "test setup failed");
                Outcome::SetupFailed(setup)
            }
            Err(check) => Outcome::CheckFailed(check),
        },
    }
}

/// Build the fixture and run a synchronous test body
pub fn run<F>(builder: FixtureBuilder, body: F) -> Outcome
where
    F: FnOnce(Fixture) -> anyhow::Result<()>,
{
    classify(body(builder.build()))
}

/// Build the fixture and run an async test body
pub async fn run_async<F, Fut>(builder: FixtureBuilder, body: F) -> Outcome
where
    F: FnOnce(Fixture) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    classify(body(builder.build()).await)
}

/// Initialize tracing for test runs. Idempotent; honors `RUST_LOG`.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

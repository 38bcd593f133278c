//! Fixtural
//!
//! A test-fixture toolkit built around three pieces:
//! - `datetime`: formatting extension traits over chrono types (canonical
//!   renderings, day/month boundaries, locale-aware names)
//! - `specimen` + `store`: an object-graph resolution pipeline that builds
//!   populated instances from ordered customization rules, with an in-memory
//!   fake store for persisted-entity interception
//! - `domain` + `app` + `harness`: a sample customer-manager workflow wired
//!   through injected collaborators, used to exercise the pipeline end to end

pub mod app;
pub mod config;
pub mod datetime;
pub mod domain;
pub mod error;
pub mod harness;
pub mod specimen;
pub mod store;

#[cfg(test)]
mod test_utils;


pub use config::Settings;
pub use error::{DomainError, SetupError};
pub use specimen::{Customization, Fixture, FixtureBuilder, Specimen};
pub use store::{FakeStore, Record};

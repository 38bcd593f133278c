//! Specimen resolution pipeline
//!
//! Turns a typed request into a populated instance. Resolution consults an
//! ordered registry of customization rules (most specific first), falls back
//! to each type's default synthesis, and supports frozen instances,
//! persisted-entity interception, and cooperative cycle protection for
//! bidirectional entity graphs.

pub mod context;
pub mod fixture;
pub mod persisted;
pub mod registry;
pub mod request;
pub mod rule;

pub use context::ResolveContext;
pub use fixture::{Fixture, FixtureBuilder};
pub use persisted::persisted_entity;
pub use registry::CustomizationRegistry;
pub use request::Request;
pub use rule::Customization;

use chrono::{DateTime, Utc};

use crate::error::SetupError;

/// A type the pipeline can produce.
///
/// `synthesize` builds the default instance for a request, using the context
/// for scalar generation and recursive resolution of referenced types. Types
/// that cannot exist without an explicit rule should return
/// [`SetupError::unresolvable`].
pub trait Specimen: Clone + Send + Sync + 'static {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError>;
}

// Scalar specimens, handy for rules that resolve loose values.

impl Specimen for String {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        Ok(ctx.string_for("string"))
    }
}

impl Specimen for i32 {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        Ok(ctx.int_in(1, 1_000))
    }
}

impl Specimen for i64 {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        Ok(i64::from(ctx.int_in(1, 1_000)))
    }
}

impl Specimen for bool {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        Ok(ctx.int_in(0, 1) == 1)
    }
}

impl Specimen for DateTime<Utc> {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        Ok(ctx.timestamp())
    }
}

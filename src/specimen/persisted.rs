//! Persisted-entity interception
//!
//! A customization that resolves a value normally (honoring every other
//! active rule) and then inserts it into the fixture's fake store before
//! returning it. The produced instance is simultaneously a fresh object and
//! a committed row: `store.find` sees it before control returns to the
//! caller.

use super::fixture::FixtureBuilder;
use super::rule::Customization;
use super::Specimen;
use crate::store::Record;

/// Rule that commits every resolved `T` into the fixture store
pub fn persisted_entity<T: Specimen + Record>() -> Customization<T> {
    Customization::new().after_resolve(|value: &T, ctx| {
        ctx.store().add(value.clone()).save();
        tracing::debug!(
            record = std::any::type_name::<T>(),
            key = ?value.key(),
            "persisted resolved specimen"
        );
        Ok(())
    })
}

impl FixtureBuilder {
    /// Persist every resolved `T` into the fixture store
    pub fn persisted<T: Specimen + Record>(self) -> Self {
        self.customize(persisted_entity::<T>())
    }

    /// Persist `T` only when resolved as the parameter `name`
    pub fn persisted_param<T: Specimen + Record>(self, name: &'static str) -> Self {
        self.customize_param(name, persisted_entity::<T>())
    }
}

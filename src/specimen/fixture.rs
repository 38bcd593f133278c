//! Fixture: the per-invocation entry point
//!
//! A `FixtureBuilder` collects customization rules, freeze directives and
//! settings; `build()` seals them into a `Fixture` whose registry can no
//! longer change. Each fixture owns a fresh fake store and its own generator
//! state, so parallel test invocations never share mutable state.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use super::context::{Counters, ResolveContext};
use super::registry::CustomizationRegistry;
use super::rule::{Customization, Rule, Scope};
use super::Specimen;
use crate::config::Settings;
use crate::error::SetupError;
use crate::store::FakeStore;

/// Ordered collection of rules and directives, sealed by `build()`
#[derive(Default)]
pub struct FixtureBuilder {
    rules: Vec<Rule>,
    freeze: HashSet<TypeId>,
    settings: Settings,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Append a type-scoped rule. Existing rules for the same type stay
    /// registered; the new one is evaluated first.
    pub fn customize<T: Specimen>(mut self, customization: Customization<T>) -> Self {
        self.rules.push(Rule::new(Scope::Type, customization));
        self
    }

    /// Append a parameter-scoped rule, evaluated before any type-scoped rule
    pub fn customize_param<T: Specimen>(
        mut self,
        name: &'static str,
        customization: Customization<T>,
    ) -> Self {
        self.rules.push(Rule::new(Scope::Param(name), customization));
        self
    }

    /// Replace all prior type-scoped rules for `T` with this one
    pub fn replace<T: Specimen>(mut self, customization: Customization<T>) -> Self {
        self.rules
            .retain(|rule| !(rule.target() == TypeId::of::<T>() && rule.scope() == Scope::Type));
        self.customize(customization)
    }

    /// Resolve `T` once and reuse that instance for every request of `T`
    /// within this fixture
    pub fn freeze<T: Specimen>(mut self) -> Self {
        self.freeze.insert(TypeId::of::<T>());
        self
    }

    pub fn build(self) -> Fixture {
        tracing::debug!(rules = self.rules.len(), "building fixture");
        Fixture {
            registry: CustomizationRegistry::new(self.rules),
            freeze_directives: self.freeze,
            frozen: RwLock::new(HashMap::new()),
            counters: Mutex::new(Counters::new(self.settings.seed)),
            store: Arc::new(FakeStore::new()),
            settings: self.settings,
        }
    }
}

/// A sealed registry plus the per-invocation store, frozen-instance cache
/// and generator state
pub struct Fixture {
    registry: CustomizationRegistry,
    freeze_directives: HashSet<TypeId>,
    frozen: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    counters: Mutex<Counters>,
    store: Arc<FakeStore>,
    settings: Settings,
}

impl Fixture {
    pub fn builder() -> FixtureBuilder {
        FixtureBuilder::new()
    }

    /// A fixture with no rules, default settings and an empty store
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Resolve any instance of `T`
    pub fn create<T: Specimen>(&self) -> Result<T, SetupError> {
        ResolveContext::new(self).resolve::<T>()
    }

    /// Resolve the parameter `name` of type `T`
    pub fn create_param<T: Specimen>(&self, name: &'static str) -> Result<T, SetupError> {
        ResolveContext::new(self).resolve_param::<T>(name)
    }

    pub fn store(&self) -> &Arc<FakeStore> {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn registry(&self) -> &CustomizationRegistry {
        &self.registry
    }

    pub(crate) fn counters(&self) -> MutexGuard<'_, Counters> {
        self.counters.lock().unwrap()
    }

    pub(crate) fn frozen_lookup<T: Specimen>(&self) -> Result<Option<T>, SetupError> {
        if !self.freeze_directives.contains(&TypeId::of::<T>()) {
            return Ok(None);
        }
        let cache = self.frozen.read().unwrap();
        match cache.get(&TypeId::of::<T>()) {
            None => Ok(None),
            Some(boxed) => boxed
                .downcast_ref::<T>()
                .cloned()
                .map(Some)
                .ok_or(SetupError::FrozenMismatch {
                    type_name: std::any::type_name::<T>(),
                }),
        }
    }

    pub(crate) fn frozen_put<T: Specimen>(&self, value: &T) {
        if self.freeze_directives.contains(&TypeId::of::<T>()) {
            self.frozen
                .write()
                .unwrap()
                .entry(TypeId::of::<T>())
                .or_insert_with(|| Box::new(value.clone()));
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

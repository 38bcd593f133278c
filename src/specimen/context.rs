//! Resolve context
//!
//! The recursive resolver. One context lives for the duration of a single
//! top-level `create` call and tracks the stack of in-progress requests so
//! entity synthesizers can break relationship cycles cooperatively.

use std::any::TypeId;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::fixture::Fixture;
use super::registry::conflicting_field;
use super::request::Request;
use super::rule::Rule;
use super::Specimen;
use crate::error::SetupError;
use crate::store::FakeStore;

/// Shared generator state, owned by the fixture so sequences continue
/// across separate `create` calls
pub(crate) struct Counters {
    seq: u64,
    rng: StdRng,
}

impl Counters {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            seq: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

pub struct ResolveContext<'a> {
    fixture: &'a Fixture,
    in_progress: Vec<Request>,
}

impl<'a> ResolveContext<'a> {
    pub(crate) fn new(fixture: &'a Fixture) -> Self {
        Self {
            fixture,
            in_progress: Vec::new(),
        }
    }

    /// Resolve any instance of `T`
    pub fn resolve<T: Specimen>(&mut self) -> Result<T, SetupError> {
        self.resolve_request(Request::of::<T>())
    }

    /// Resolve the parameter `name` of type `T`
    pub fn resolve_param<T: Specimen>(&mut self, name: &'static str) -> Result<T, SetupError> {
        self.resolve_request(Request::param::<T>(name))
    }

    fn resolve_request<T: Specimen>(&mut self, request: Request) -> Result<T, SetupError> {
        let fixture = self.fixture;

        if let Some(frozen) = fixture.frozen_lookup::<T>()? {
            tracing::debug!(specimen = request.type_name(), "reusing frozen instance");
            return Ok(frozen);
        }

        if self
            .in_progress
            .iter()
            .any(|r| r.type_id() == request.type_id())
        {
            return Err(SetupError::CyclicRequest {
                type_name: request.type_name(),
            });
        }

        let rules = fixture.registry().matching(&request);
        if let Some(field) = conflicting_field(&rules) {
            return Err(SetupError::ConflictingRules {
                type_name: request.type_name(),
                field,
            });
        }

        self.in_progress.push(request);
        let result = self.resolve_with_rules::<T>(&rules);
        self.in_progress.pop();

        let value = result?;
        fixture.frozen_put(&value);
        Ok(value)
    }

    fn resolve_with_rules<T: Specimen>(&mut self, rules: &[&Rule]) -> Result<T, SetupError> {
        // Walk rules in evaluation order until one supplies a full value;
        // rules past the supplier do not participate in this resolution.
        let mut supplied: Option<T> = None;
        let mut walked = rules.len();
        for (index, rule) in rules.iter().enumerate() {
            let Some(actions) = rule.actions::<T>() else {
                continue;
            };
            if let Some(make) = actions.supply_fn() {
                if let Some(value) = make(self)? {
                    tracing::debug!(specimen = rule.target_name(), "rule supplied value");
                    supplied = Some(value);
                    walked = index + 1;
                    break;
                }
            }
        }

        let active = &rules[..walked];
        let mut value = match supplied {
            Some(value) => value,
            None => {
                tracing::debug!(
                    specimen = std::any::type_name::<T>(),
                    "synthesizing default instance"
                );
                T::synthesize(self)?
            }
        };

        // Least specific first, so the most specific writer lands last
        for rule in active.iter().rev() {
            if let Some(actions) = rule.actions::<T>() {
                actions.apply_sets(&mut value);
            }
        }

        for rule in active {
            if let Some(actions) = rule.actions::<T>() {
                actions.run_after(&value, self)?;
            }
        }

        Ok(value)
    }

    /// Whether a resolution for `T` is already on the stack. Entity
    /// synthesizers use this to stop relationship fan-out instead of
    /// re-entering an in-progress type.
    pub fn is_resolving<T: 'static>(&self) -> bool {
        self.in_progress
            .iter()
            .any(|r| r.type_id() == TypeId::of::<T>())
    }

    /// Whether an active rule omits the given field of the current request
    pub fn omitted(&self, field: &str) -> bool {
        match self.in_progress.last() {
            Some(request) => self.fixture.registry().omits(request, field),
            None => false,
        }
    }

    pub fn store(&self) -> &Arc<FakeStore> {
        self.fixture.store()
    }

    /// Fan-out size for synthesized collections
    pub fn collection_size(&self) -> usize {
        self.fixture.settings().collection_size
    }

    /// Next value of the shared identity sequence
    pub fn next_id(&mut self) -> i32 {
        self.fixture.counters().next_seq() as i32
    }

    /// Deterministic-but-arbitrary string for a named field
    pub fn string_for(&mut self, field: &str) -> String {
        let n = self.fixture.counters().next_seq();
        format!("{field}-{n:03}")
    }

    /// Deterministic-but-arbitrary well-formed email address
    pub fn email(&mut self) -> String {
        let n = self.fixture.counters().next_seq();
        format!("user-{n:03}@example.test")
    }

    /// Bounded random integer from the seeded generator
    pub fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        self.fixture.counters().rng.gen_range(lo..=hi)
    }

    /// Pick one of the given options with the seeded generator
    pub fn pick(&mut self, options: &[&'static str]) -> &'static str {
        let index = self.fixture.counters().rng.gen_range(0..options.len());
        options[index]
    }

    pub fn timestamp(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

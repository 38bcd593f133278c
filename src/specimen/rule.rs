//! Customization rules
//!
//! A rule matches requests for one type (optionally one named parameter) and
//! carries actions: constrain named fields, omit fields from synthesis,
//! supply the whole value, or run a side effect once the value is complete.
//! Rules are stored type-erased; the resolver downcasts them back by the
//! request's type tag.

use std::any::{Any, TypeId};

use super::context::ResolveContext;
use super::request::Request;
use super::Specimen;
use crate::error::SetupError;

pub(crate) type SetFn<T> = Box<dyn Fn(&mut T) + Send + Sync>;
pub(crate) type SupplyFn<T> =
    Box<dyn Fn(&mut ResolveContext<'_>) -> Result<Option<T>, SetupError> + Send + Sync>;
pub(crate) type AfterFn<T> =
    Box<dyn Fn(&T, &mut ResolveContext<'_>) -> Result<(), SetupError> + Send + Sync>;

/// Declarative override for how specimens of `T` are produced
pub struct Customization<T> {
    sets: Vec<(&'static str, SetFn<T>)>,
    omits: Vec<&'static str>,
    supply: Option<SupplyFn<T>>,
    after: Vec<AfterFn<T>>,
}

impl<T: Specimen> Customization<T> {
    pub fn new() -> Self {
        Self {
            sets: Vec::new(),
            omits: Vec::new(),
            supply: None,
            after: Vec::new(),
        }
    }

    /// Constrain a named field after synthesis. The name is the contract the
    /// resolver uses for precedence and conflict checks; the closure does the
    /// actual write.
    pub fn with(
        mut self,
        field: &'static str,
        set: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> Self {
        self.sets.push((field, Box::new(set)));
        self
    }

    /// Omit a named field from auto-generation. Synthesizers observe this
    /// through [`ResolveContext::omitted`].
    pub fn without(mut self, field: &'static str) -> Self {
        self.omits.push(field);
        self
    }

    /// Substitute the entire resolution. Returning `Ok(None)` signals
    /// "no specimen" and falls through to the next rule or to synthesis.
    pub fn supply(
        mut self,
        make: impl Fn(&mut ResolveContext<'_>) -> Result<Option<T>, SetupError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.supply = Some(Box::new(make));
        self
    }

    /// Run a side effect once the value is fully resolved
    pub fn after_resolve(
        mut self,
        hook: impl Fn(&T, &mut ResolveContext<'_>) -> Result<(), SetupError> + Send + Sync + 'static,
    ) -> Self {
        self.after.push(Box::new(hook));
        self
    }

    pub(crate) fn supply_fn(&self) -> Option<&SupplyFn<T>> {
        self.supply.as_ref()
    }

    pub(crate) fn apply_sets(&self, value: &mut T) {
        for (_, set) in &self.sets {
            set(value);
        }
    }

    pub(crate) fn run_after(
        &self,
        value: &T,
        ctx: &mut ResolveContext<'_>,
    ) -> Result<(), SetupError> {
        for hook in &self.after {
            hook(value, ctx)?;
        }
        Ok(())
    }
}

impl<T: Specimen> Default for Customization<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// How a rule is scoped to requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Any request for the target type
    Type,
    /// Only requests for the named parameter of the target type
    Param(&'static str),
}

/// Type-erased rule as stored in the registry
pub(crate) struct Rule {
    target: TypeId,
    target_name: &'static str,
    scope: Scope,
    set_fields: Vec<&'static str>,
    omit_fields: Vec<&'static str>,
    actions: Box<dyn Any + Send + Sync>,
}

impl Rule {
    pub(crate) fn new<T: Specimen>(scope: Scope, customization: Customization<T>) -> Self {
        Self {
            target: TypeId::of::<T>(),
            target_name: std::any::type_name::<T>(),
            scope,
            set_fields: customization.sets.iter().map(|(field, _)| *field).collect(),
            omit_fields: customization.omits.clone(),
            actions: Box::new(customization),
        }
    }

    pub(crate) fn matches(&self, request: &Request) -> bool {
        self.target == request.type_id()
            && match self.scope {
                Scope::Type => true,
                Scope::Param(name) => request.param_name() == Some(name),
            }
    }

    pub(crate) fn actions<T: Specimen>(&self) -> Option<&Customization<T>> {
        self.actions.downcast_ref::<Customization<T>>()
    }

    pub(crate) fn target(&self) -> TypeId {
        self.target
    }

    pub(crate) fn target_name(&self) -> &'static str {
        self.target_name
    }

    pub(crate) fn scope(&self) -> Scope {
        self.scope
    }

    pub(crate) fn set_fields(&self) -> &[&'static str] {
        &self.set_fields
    }

    pub(crate) fn omit_fields(&self) -> &[&'static str] {
        &self.omit_fields
    }
}

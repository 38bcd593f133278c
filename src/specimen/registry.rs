//! Ordered customization registry
//!
//! Rules are evaluated most specific first: parameter-scoped rules before
//! type-scoped rules, and within a scope class the latest-added rule first
//! (append semantics). The registry is immutable once built; no rule can be
//! added mid-resolution.

use super::request::Request;
use super::rule::{Rule, Scope};

pub struct CustomizationRegistry {
    rules: Vec<Rule>,
}

impl CustomizationRegistry {
    pub(crate) fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules matching a request, in evaluation order
    pub(crate) fn matching(&self, request: &Request) -> Vec<&Rule> {
        let mut hits: Vec<(usize, usize, &Rule)> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.matches(request))
            .map(|(added, rule)| {
                let class = match rule.scope() {
                    Scope::Param(_) => 0,
                    Scope::Type => 1,
                };
                (class, added, rule)
            })
            .collect();
        hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        hits.into_iter().map(|(_, _, rule)| rule).collect()
    }

    /// Whether any matching rule omits the given field
    pub(crate) fn omits(&self, request: &Request, field: &str) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.matches(request))
            .any(|rule| rule.omit_fields().iter().any(|omitted| *omitted == field))
    }

}

/// A field both set and omitted across the active rules is a setup error
pub(crate) fn conflicting_field(rules: &[&Rule]) -> Option<&'static str> {
    rules
        .iter()
        .flat_map(|rule| rule.set_fields().iter().copied())
        .find(|field| {
            rules
                .iter()
                .any(|rule| rule.omit_fields().iter().any(|omitted| omitted == field))
        })
}

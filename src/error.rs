//! Unified error types
//!
//! This module defines error types for each layer:
//! - `SetupError`: fixture pipeline errors, raised before a function under
//!   test ever runs
//! - `MailError` / `AuthError`: collaborator port errors
//! - `DomainError`: business errors raised by the sample workflow

use thiserror::Error;

use crate::domain::entities::CustomerId;

/// Fixture pipeline errors.
///
/// A `SetupError` means specimen resolution could not produce a value. The
/// harness reports these distinctly from check failures; they are never
/// retried.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no rule or default synthesis can satisfy a request for {type_name}")]
    Unresolvable { type_name: &'static str },

    #[error("resolution re-entered an in-progress request for {type_name}")]
    CyclicRequest { type_name: &'static str },

    #[error("rules for {type_name} both set and omit field '{field}'")]
    ConflictingRules {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("frozen value cached for {type_name} has an unexpected type")]
    FrozenMismatch { type_name: &'static str },
}

impl SetupError {
    /// Shorthand for types that cannot be synthesized without a rule.
    pub fn unresolvable<T>() -> Self {
        Self::Unresolvable {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Mail collaborator errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail rejected for {0}")]
    Rejected(String),

    #[error("mail transport failure: {0}")]
    Transport(String),
}

/// Authentication collaborator errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("registration rejected for {0}")]
    Rejected(String),

    #[error("auth service unavailable: {0}")]
    Unavailable(String),
}

/// Domain layer errors raised by the sample customer workflow.
///
/// These propagate unmodified so tests can assert on their kind.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("mail error: {0}")]
    Mail(#[from] MailError),
}

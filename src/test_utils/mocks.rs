//! Mock implementations of port traits
//!
//! In-memory implementations with verifiable call logs. Tests read the logs
//! directly (they are `Arc`-shared) to assert on calls and call counts.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{AuthService, Mailer};
use crate::error::{AuthError, MailError};

// ============================================================================
// Mock Mailer
// ============================================================================

/// A mock mailer that records every send
#[derive(Default)]
pub struct MockMailer {
    /// (recipient, subject) pairs in send order
    pub sent: Arc<RwLock<Vec<(String, String)>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mailer = Self::default();
        *mailer.should_fail.write().unwrap() = true;
        mailer
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }

    /// Subjects of every message sent to one recipient
    pub fn subjects_for(&self, to: &str) -> Vec<String> {
        self.sent
            .read()
            .unwrap()
            .iter()
            .filter(|(recipient, _)| recipient == to)
            .map(|(_, subject)| subject.clone())
            .collect()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str) -> Result<(), MailError> {
        if *self.should_fail.read().unwrap() {
            return Err(MailError::Transport("mock failure".to_string()));
        }
        self.sent
            .write()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

// ============================================================================
// Mock Auth Service
// ============================================================================

/// A mock auth service that records registrations
#[derive(Default)]
pub struct MockAuthService {
    pub registered: Arc<RwLock<Vec<String>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let auth = Self::default();
        *auth.should_fail.write().unwrap() = true;
        auth
    }

    pub fn registered_count(&self) -> usize {
        self.registered.read().unwrap().len()
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(&self, email: &str) -> Result<(), AuthError> {
        if *self.should_fail.read().unwrap() {
            return Err(AuthError::Unavailable("mock failure".to_string()));
        }
        self.registered.write().unwrap().push(email.to_string());
        Ok(())
    }
}

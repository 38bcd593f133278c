//! Domain ports (traits)
//!
//! Collaborator interfaces the sample workflow depends on. Tests inject mock
//! implementations with verifiable call logs; nothing here is implemented
//! for real transports.

use async_trait::async_trait;

use crate::error::{AuthError, MailError};

/// Outbound mail capability
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a message to one recipient
    async fn send(&self, to: &str, subject: &str) -> Result<(), MailError>;
}

/// Authentication capability
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register login credentials for a new account
    async fn register(&self, email: &str) -> Result<(), AuthError>;
}

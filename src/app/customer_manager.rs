//! Customer manager
//!
//! Handles customer registration and profile updates against the fake store,
//! with mail and auth collaborators injected by the caller.

use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use crate::domain::ports::{AuthService, Mailer};
use crate::error::DomainError;
use crate::store::FakeStore;

/// Subject of the welcome mail sent on successful registration
pub const WELCOME_SUBJECT: &str = "Welcome";

fn email_is_valid(email: &str) -> bool {
    let re = regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    re.is_match(email)
}

/// Service for managing customers
pub struct CustomerManager<A, M>
where
    A: AuthService,
    M: Mailer,
{
    store: Arc<FakeStore>,
    auth: Arc<A>,
    mailer: Arc<M>,
}

impl<A, M> CustomerManager<A, M>
where
    A: AuthService,
    M: Mailer,
{
    pub fn new(store: Arc<FakeStore>, auth: Arc<A>, mailer: Arc<M>) -> Self {
        Self {
            store,
            auth,
            mailer,
        }
    }

    /// Register a new customer
    ///
    /// Validates the email, rejects duplicates, persists the row, registers
    /// credentials with the auth service and sends a welcome mail.
    pub async fn create(&self, data: CustomerCreate) -> Result<Customer, DomainError> {
        if !email_is_valid(&data.email) {
            return Err(DomainError::InvalidEmail(data.email));
        }

        if self
            .store
            .query::<Customer>()
            .iter()
            .any(|c| c.email == data.email)
        {
            return Err(DomainError::EmailAlreadyExists(data.email));
        }

        let id = self.next_id();
        let customer = Customer {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            age: data.age,
            created_at: chrono::Utc::now(),
            addresses: Vec::new(),
        };

        self.store.add(customer.clone()).save();
        self.auth.register(&customer.email).await?;
        self.mailer.send(&customer.email, WELCOME_SUBJECT).await?;

        tracing::info!(customer = %customer.id, "customer created");
        Ok(customer)
    }

    /// Update an existing customer
    ///
    /// `None` data is a touch-only success. An email change revalidates
    /// format and uniqueness.
    pub async fn update(
        &self,
        id: CustomerId,
        data: Option<CustomerUpdate>,
    ) -> Result<Customer, DomainError> {
        let mut customer = self
            .store
            .find::<Customer>(id)
            .ok_or(DomainError::CustomerNotFound(id))?;

        if let Some(data) = data {
            if let Some(email) = data.email {
                if !email_is_valid(&email) {
                    return Err(DomainError::InvalidEmail(email));
                }
                if self
                    .store
                    .query::<Customer>()
                    .iter()
                    .any(|c| c.id != id && c.email == email)
                {
                    return Err(DomainError::EmailAlreadyExists(email));
                }
                customer.email = email;
            }
            if let Some(age) = data.age {
                customer.age = age;
            }
        }

        self.store.update(customer.clone());
        tracing::info!(customer = %customer.id, "customer updated");
        Ok(customer)
    }

    fn next_id(&self) -> CustomerId {
        let max = self
            .store
            .query::<Customer>()
            .iter()
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0);
        CustomerId(max + 1)
    }
}

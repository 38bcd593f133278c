//! Customer domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;
use crate::error::SetupError;
use crate::specimen::{ResolveContext, Specimen};
use crate::store::Record;

/// Unique identifier for a customer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CustomerId(pub i32);

impl CustomerId {
    /// Placeholder key for a back-reference whose parent is still being
    /// resolved
    pub const UNASSIGNED: CustomerId = CustomerId(0);
}

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer with embedded forward navigation to its addresses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub addresses: Vec<Address>,
}

impl Customer {
    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

impl Record for Customer {
    type Key = CustomerId;

    fn key(&self) -> CustomerId {
        self.id
    }
}

impl Specimen for Customer {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        let id = CustomerId(ctx.next_id());

        // Fan-out rule: skip addresses entirely while an address resolution
        // is in progress above us (that address initiated this request), or
        // when a rule omits them. Children built here get their
        // back-reference patched to this customer.
        let mut addresses = Vec::new();
        if !ctx.is_resolving::<Address>() && !ctx.omitted("addresses") {
            for _ in 0..ctx.collection_size() {
                let mut address: Address = ctx.resolve()?;
                address.customer_id = id;
                addresses.push(address);
            }
        }

        Ok(Self {
            id,
            first_name: ctx.string_for("first-name"),
            last_name: ctx.string_for("last-name"),
            email: ctx.email(),
            age: ctx.int_in(18, 80),
            created_at: ctx.timestamp(),
            addresses,
        })
    }
}

/// Data needed to create a new customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
}

impl Specimen for CustomerCreate {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        Ok(Self {
            first_name: ctx.string_for("first-name"),
            last_name: ctx.string_for("last-name"),
            email: ctx.email(),
            age: ctx.int_in(18, 80),
        })
    }
}

/// Partial update for an existing customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub email: Option<String>,
    pub age: Option<i32>,
}

//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults. Each
//! call gets a fresh id so multiple rows can coexist in one store.

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;

use crate::domain::entities::{
    Address, AddressId, Country, CountryId, Customer, CustomerCreate, CustomerId,
};

// Factory ids start high so they never collide with ids the workflow under
// test assigns itself.
static NEXT_ID: AtomicI32 = AtomicI32::new(1_000);

fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::SeqCst)
}

/// Create a test customer with default values
pub fn test_customer() -> Customer {
    let id = next_id();
    Customer {
        id: CustomerId(id),
        first_name: "Test".to_string(),
        last_name: "Customer".to_string(),
        email: format!("customer-{id}@example.test"),
        age: 30,
        created_at: Utc::now(),
        addresses: vec![],
    }
}

/// Create a test customer with a specific email
pub fn test_customer_named(email: &str) -> Customer {
    Customer {
        email: email.to_string(),
        ..test_customer()
    }
}

/// Create a test address attached to a customer
pub fn test_address(customer_id: CustomerId) -> Address {
    Address {
        id: AddressId(next_id()),
        customer_id,
        line1: "123 Main St".to_string(),
        line2: None,
        state: "CA".to_string(),
        country_id: CountryId(1),
    }
}

/// Create a test country with default values
pub fn test_country() -> Country {
    Country {
        id: CountryId(next_id()),
        name: "Argentina".to_string(),
        iso_code: "AR".to_string(),
    }
}

/// Create valid customer-create data
pub fn test_customer_create() -> CustomerCreate {
    CustomerCreate {
        first_name: "New".to_string(),
        last_name: "Customer".to_string(),
        email: format!("create-{}@example.test", next_id()),
        age: 25,
    }
}

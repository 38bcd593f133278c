//! Domain entities
//!
//! Plain data records with integer identity keys. Relationships are carried
//! as id references (a child points at its parent by key, never by embedded
//! pointer), which keeps the graph acyclic in memory while the specimen
//! pipeline still resolves both directions.

pub mod address;
pub mod country;
pub mod customer;

pub use address::{Address, AddressId};
pub use country::{Country, CountryId};
pub use customer::{Customer, CustomerCreate, CustomerId, CustomerUpdate};

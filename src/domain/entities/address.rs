//! Address domain entity

use serde::{Deserialize, Serialize};

use super::country::{Country, CountryId};
use super::customer::{Customer, CustomerId};
use crate::error::SetupError;
use crate::specimen::{ResolveContext, Specimen};
use crate::store::Record;

/// Unique identifier for an address
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AddressId(pub i32);

impl From<i32> for AddressId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer's postal address. `customer_id` is the back-reference to the
/// owning customer, carried by key rather than by embedded pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub customer_id: CustomerId,
    pub line1: String,
    pub line2: Option<String>,
    pub state: String,
    pub country_id: CountryId,
}

impl Record for Address {
    type Key = AddressId;

    fn key(&self) -> AddressId {
        self.id
    }
}

impl Specimen for Address {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        // Back-reference rule: while a customer is being resolved above us,
        // leave the key unassigned and let the parent patch it in. A rule
        // omitting "customer" keeps the address detached on purpose.
        let customer_id = if ctx.is_resolving::<Customer>() || ctx.omitted("customer") {
            CustomerId::UNASSIGNED
        } else {
            ctx.resolve::<Customer>()?.id
        };

        let country: Country = ctx.resolve()?;

        Ok(Self {
            id: AddressId(ctx.next_id()),
            customer_id,
            line1: format!("{} Main St", ctx.int_in(1, 999)),
            line2: None,
            state: ctx.string_for("state"),
            country_id: country.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specimen::{Customization, Fixture};

    #[test]
    fn standalone_address_resolves_a_parent_customer() {
        let fixture = Fixture::new();

        let address: Address = fixture.create().unwrap();

        assert_ne!(address.customer_id, CustomerId::UNASSIGNED);
        assert!(!address.line1.is_empty());
    }

    #[test]
    fn without_customer_leaves_back_reference_unassigned() {
        let fixture = Fixture::builder()
            .customize::<Address>(Customization::new().without("customer"))
            .build();

        let address: Address = fixture.create().unwrap();

        assert_eq!(address.customer_id, CustomerId::UNASSIGNED);
    }

    #[test]
    fn address_id_display() {
        assert_eq!(AddressId(3).to_string(), "3");
    }
}

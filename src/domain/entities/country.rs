//! Country reference entity

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::specimen::{ResolveContext, Specimen};
use crate::store::Record;

/// Unique identifier for a country
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CountryId(pub i32);

impl From<i32> for CountryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub iso_code: String,
}

impl Record for Country {
    type Key = CountryId;

    fn key(&self) -> CountryId {
        self.id
    }
}

impl Specimen for Country {
    fn synthesize(ctx: &mut ResolveContext<'_>) -> Result<Self, SetupError> {
        let (name, iso_code) = match ctx.pick(&["AR", "BR", "ES", "US", "UY"]) {
            "AR" => ("Argentina", "AR"),
            "BR" => ("Brazil", "BR"),
            "ES" => ("Spain", "ES"),
            "UY" => ("Uruguay", "UY"),
            _ => ("United States", "US"),
        };
        Ok(Self {
            id: CountryId(ctx.next_id()),
            name: name.to_string(),
            iso_code: iso_code.to_string(),
        })
    }
}

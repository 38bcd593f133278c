//! Sample domain
//!
//! The demonstration subject for the fixture pipeline:
//! - `entities`: customer/address/country records with arena-style ids
//! - `ports`: collaborator traits injected into the workflow under test

pub mod entities;
pub mod ports;

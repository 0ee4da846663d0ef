//! Database entities for the warehouse inventory service.

pub mod product;
pub mod warehouse;

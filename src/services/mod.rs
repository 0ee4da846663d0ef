pub mod inventory;
pub mod products;
pub mod warehouses;

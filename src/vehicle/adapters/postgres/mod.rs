//! `PostgreSQL` adapters for vehicle registration persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresVehicleRepository, VehiclePgPool};

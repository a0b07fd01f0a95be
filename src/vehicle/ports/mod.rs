//! Port contracts for vehicle registration persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the vehicle
//! registry services.

pub mod repository;

pub use repository::{VehicleRepository, VehicleRepositoryError, VehicleRepositoryResult};

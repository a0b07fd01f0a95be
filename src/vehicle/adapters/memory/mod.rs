//! In-memory adapters for vehicle registration.

mod vehicle;

pub use vehicle::InMemoryVehicleRepository;

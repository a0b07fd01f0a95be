//! Application services for vehicle registration.

mod registry;

pub use registry::{
    RegisterVehicleRequest, UniqueField, UniquenessConflict, UpdateVehicleRequest,
    VehicleRegistryService, VehicleRegistryServiceError, VehicleRegistryServiceResult,
};

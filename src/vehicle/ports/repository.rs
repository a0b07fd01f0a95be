//! Repository port for vehicle persistence and lookup.

use crate::vehicle::domain::{Chassis, Plate, Renavam, Vehicle, VehicleId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for vehicle repository operations.
pub type VehicleRepositoryResult<T> = Result<T, VehicleRepositoryError>;

/// Vehicle persistence contract.
///
/// The store is a plain keyed container: it never checks plate, chassis,
/// or renavam uniqueness. Uniqueness is a registration policy enforced by
/// the service layer before writes, which keeps a durable implementation
/// free to add its own indexes without changing the contract.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Inserts or replaces the record stored under the vehicle's
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRepositoryError::Persistence`] when the underlying
    /// store rejects the write.
    async fn save(&self, vehicle: &Vehicle) -> VehicleRepositoryResult<()>;

    /// Finds a vehicle by identifier.
    ///
    /// Returns `None` when the vehicle does not exist.
    async fn find_by_id(&self, id: VehicleId) -> VehicleRepositoryResult<Option<Vehicle>>;

    /// Finds the vehicle registered under the given plate, if any.
    ///
    /// Equality is exact-string; callers normalize before querying if
    /// needed.
    async fn find_by_plate(&self, plate: &Plate) -> VehicleRepositoryResult<Option<Vehicle>>;

    /// Finds the vehicle registered under the given chassis number, if
    /// any.
    async fn find_by_chassis(&self, chassis: &Chassis)
    -> VehicleRepositoryResult<Option<Vehicle>>;

    /// Finds the vehicle registered under the given renavam, if any.
    async fn find_by_renavam(&self, renavam: &Renavam)
    -> VehicleRepositoryResult<Option<Vehicle>>;

    /// Returns all registered vehicles, order unspecified.
    async fn find_all(&self) -> VehicleRepositoryResult<Vec<Vehicle>>;

    /// Replaces the record stored under an existing vehicle's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRepositoryError::NotFound`] when no record exists
    /// under the vehicle's identifier.
    async fn update(&self, vehicle: &Vehicle) -> VehicleRepositoryResult<()>;

    /// Removes the record stored under the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRepositoryError::NotFound`] when no record exists
    /// under the identifier.
    async fn delete(&self, id: VehicleId) -> VehicleRepositoryResult<()>;

    /// Returns whether a record exists under the identifier.
    async fn exists(&self, id: VehicleId) -> VehicleRepositoryResult<bool>;
}

/// Errors returned by vehicle repository implementations.
#[derive(Debug, Clone, Error)]
pub enum VehicleRepositoryError {
    /// The vehicle was not found.
    #[error("vehicle not found: {0}")]
    NotFound(VehicleId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl VehicleRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! Service layer for vehicle registration workflows.
//!
//! Provides [`VehicleRegistryService`] which coordinates vehicle
//! registration, update, lookup, listing, and deregistration, enforcing
//! the uniqueness of plate, chassis, and renavam across the collection.

use crate::vehicle::{
    domain::{
        Chassis, MakeName, ModelName, ModelYear, Plate, Renavam, Vehicle, VehicleChanges,
        VehicleDescriptor, VehicleDomainError, VehicleId, VehicleType,
    },
    ports::{VehicleRepository, VehicleRepositoryError},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Request payload for registering a new vehicle.
///
/// Fields are carried raw; the service validates them in a fixed order
/// (plate, chassis, renavam, year, then model and make) so the first
/// failing rule is the one reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterVehicleRequest {
    plate: String,
    chassis: String,
    renavam: String,
    model: String,
    make: String,
    year: i32,
    color: String,
    vehicle_type: VehicleType,
}

impl RegisterVehicleRequest {
    /// Creates a request with all registration fields.
    #[expect(
        clippy::too_many_arguments,
        reason = "registration bundles all mandatory fields for a single domain aggregate"
    )]
    #[must_use]
    pub fn new(
        plate: impl Into<String>,
        chassis: impl Into<String>,
        renavam: impl Into<String>,
        model: impl Into<String>,
        make: impl Into<String>,
        year: i32,
        color: impl Into<String>,
        vehicle_type: VehicleType,
    ) -> Self {
        Self {
            plate: plate.into(),
            chassis: chassis.into(),
            renavam: renavam.into(),
            model: model.into(),
            make: make.into(),
            year,
            color: color.into(),
            vehicle_type,
        }
    }
}

/// Request payload for updating an existing vehicle.
///
/// Only the fields set through the `with_*` builders are applied; absent
/// fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateVehicleRequest {
    plate: Option<String>,
    chassis: Option<String>,
    renavam: Option<String>,
    model: Option<String>,
    make: Option<String>,
    year: Option<i32>,
    color: Option<String>,
    vehicle_type: Option<VehicleType>,
}

impl UpdateVehicleRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement plate.
    #[must_use]
    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = Some(plate.into());
        self
    }

    /// Sets a replacement chassis number.
    #[must_use]
    pub fn with_chassis(mut self, chassis: impl Into<String>) -> Self {
        self.chassis = Some(chassis.into());
        self
    }

    /// Sets a replacement renavam.
    #[must_use]
    pub fn with_renavam(mut self, renavam: impl Into<String>) -> Self {
        self.renavam = Some(renavam.into());
        self
    }

    /// Sets a replacement model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets a replacement make name.
    #[must_use]
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Sets a replacement model year.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets a replacement color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets a replacement vehicle classification.
    #[must_use]
    pub const fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }
}

/// Uniquely indexed vehicle field named in a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    /// The license plate.
    Plate,
    /// The chassis number.
    Chassis,
    /// The renavam.
    Renavam,
}

impl UniqueField {
    /// Returns the field name used in conflict messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plate => "plate",
            Self::Chassis => "chassis",
            Self::Renavam => "renavam",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A uniqueness constraint collision with a different existing vehicle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("vehicle with {field} {value} already exists")]
pub struct UniquenessConflict {
    field: UniqueField,
    value: String,
}

impl UniquenessConflict {
    fn new(field: UniqueField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Returns the conflicting field.
    #[must_use]
    pub const fn field(&self) -> UniqueField {
        self.field
    }

    /// Returns the conflicting value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Service-level errors for vehicle registry operations.
///
/// A boundary adapter maps these onto its protocol: [`Self::Domain`] is
/// the caller's input to correct, [`Self::Conflict`] a uniqueness
/// collision, and [`Self::Repository`] either a missing vehicle or an
/// unexpected storage failure.
#[derive(Debug, Error)]
pub enum VehicleRegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] VehicleDomainError),
    /// A plate, chassis, or renavam collides with another vehicle.
    #[error(transparent)]
    Conflict(#[from] UniquenessConflict),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] VehicleRepositoryError),
}

/// Result type for vehicle registry service operations.
pub type VehicleRegistryServiceResult<T> = Result<T, VehicleRegistryServiceError>;

/// Vehicle registration orchestration service.
#[derive(Clone)]
pub struct VehicleRegistryService<R, C>
where
    R: VehicleRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    // Serializes the uniqueness check-then-act in register/update; the
    // store itself is a plain keyed container with no such guarantee.
    registration_lock: Arc<Mutex<()>>,
}

impl<R, C> VehicleRegistryService<R, C>
where
    R: VehicleRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new vehicle registry service.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            registration_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Registers a new vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRegistryServiceError::Domain`] when a field fails
    /// validation, [`VehicleRegistryServiceError::Conflict`] when the
    /// plate, chassis, or renavam is already registered to another
    /// vehicle, or [`VehicleRegistryServiceError::Repository`] when the
    /// store rejects the write.
    pub async fn register(
        &self,
        request: RegisterVehicleRequest,
    ) -> VehicleRegistryServiceResult<Vehicle> {
        let RegisterVehicleRequest {
            plate: raw_plate,
            chassis: raw_chassis,
            renavam: raw_renavam,
            model: raw_model,
            make: raw_make,
            year: raw_year,
            color,
            vehicle_type,
        } = request;

        let plate = Plate::new(raw_plate)?;
        let chassis = Chassis::new(raw_chassis)?;
        let renavam = Renavam::new(raw_renavam)?;
        let year = ModelYear::new(raw_year, &*self.clock)?;
        let model = ModelName::new(raw_model)?;
        let make = MakeName::new(raw_make)?;

        let _guard = self.registration_lock.lock().await;
        self.ensure_unique(Some(&plate), Some(&chassis), Some(&renavam), None)
            .await?;

        let vehicle = Vehicle::new(
            VehicleDescriptor {
                plate,
                chassis,
                renavam,
                model,
                make,
                year,
                color,
                vehicle_type,
            },
            &*self.clock,
        );
        self.repository.save(&vehicle).await?;
        Ok(vehicle)
    }

    /// Updates an existing vehicle, applying only the supplied fields.
    ///
    /// A vehicle may re-supply its own plate, chassis, or renavam without
    /// raising a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRegistryServiceError::Domain`] when a supplied
    /// field fails validation, [`VehicleRegistryServiceError::Conflict`]
    /// when a supplied unique field belongs to a different vehicle, or
    /// [`VehicleRegistryServiceError::Repository`] when the vehicle does
    /// not exist or persistence fails. On any failure the stored vehicle
    /// is left untouched.
    pub async fn update(
        &self,
        id: VehicleId,
        request: UpdateVehicleRequest,
    ) -> VehicleRegistryServiceResult<Vehicle> {
        let changes = parse_changes(request, &*self.clock)?;

        let _guard = self.registration_lock.lock().await;
        let mut vehicle = self.find_by_id_or_error(id).await?;
        self.ensure_unique(changes.plate(), changes.chassis(), changes.renavam(), Some(id))
            .await?;

        vehicle.apply(changes, &*self.clock);
        self.repository.update(&vehicle).await?;
        Ok(vehicle)
    }

    /// Finds a vehicle by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRegistryServiceError::Repository`] with
    /// [`VehicleRepositoryError::NotFound`] when the vehicle does not
    /// exist, or when persistence lookup fails.
    pub async fn find_by_id(&self, id: VehicleId) -> VehicleRegistryServiceResult<Vehicle> {
        self.find_by_id_or_error(id).await
    }

    /// Returns all registered vehicles; an empty collection is a valid
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRegistryServiceError::Repository`] when
    /// persistence lookup fails.
    pub async fn list_all(&self) -> VehicleRegistryServiceResult<Vec<Vehicle>> {
        Ok(self.repository.find_all().await?)
    }

    /// Removes a vehicle from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleRegistryServiceError::Repository`] with
    /// [`VehicleRepositoryError::NotFound`] when the vehicle does not
    /// exist, or when persistence fails.
    pub async fn deregister(&self, id: VehicleId) -> VehicleRegistryServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    async fn find_by_id_or_error(
        &self,
        id: VehicleId,
    ) -> VehicleRegistryServiceResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| VehicleRepositoryError::NotFound(id).into())
    }

    /// Checks the three unique fields in canonical order (plate, chassis,
    /// renavam); a match on `current` itself is not a conflict.
    async fn ensure_unique(
        &self,
        plate: Option<&Plate>,
        chassis: Option<&Chassis>,
        renavam: Option<&Renavam>,
        current: Option<VehicleId>,
    ) -> VehicleRegistryServiceResult<()> {
        if let Some(candidate) = plate
            && let Some(existing) = self.repository.find_by_plate(candidate).await?
            && Some(existing.id()) != current
        {
            return Err(UniquenessConflict::new(UniqueField::Plate, candidate.as_str()).into());
        }

        if let Some(candidate) = chassis
            && let Some(existing) = self.repository.find_by_chassis(candidate).await?
            && Some(existing.id()) != current
        {
            return Err(UniquenessConflict::new(UniqueField::Chassis, candidate.as_str()).into());
        }

        if let Some(candidate) = renavam
            && let Some(existing) = self.repository.find_by_renavam(candidate).await?
            && Some(existing.id()) != current
        {
            return Err(UniquenessConflict::new(UniqueField::Renavam, candidate.as_str()).into());
        }

        Ok(())
    }
}

/// Validates the supplied fields of an update request in the same order
/// as registration: plate, chassis, renavam, year, then model and make.
/// The first failure wins and no change set is produced.
fn parse_changes(
    request: UpdateVehicleRequest,
    clock: &impl Clock,
) -> Result<VehicleChanges, VehicleDomainError> {
    let UpdateVehicleRequest {
        plate,
        chassis,
        renavam,
        model,
        make,
        year,
        color,
        vehicle_type,
    } = request;

    let mut changes = VehicleChanges::new();
    if let Some(raw) = plate {
        changes = changes.with_plate(Plate::new(raw)?);
    }
    if let Some(raw) = chassis {
        changes = changes.with_chassis(Chassis::new(raw)?);
    }
    if let Some(raw) = renavam {
        changes = changes.with_renavam(Renavam::new(raw)?);
    }
    if let Some(raw) = year {
        changes = changes.with_year(ModelYear::new(raw, clock)?);
    }
    if let Some(raw) = model {
        changes = changes.with_model(ModelName::new(raw)?);
    }
    if let Some(raw) = make {
        changes = changes.with_make(MakeName::new(raw)?);
    }
    if let Some(raw) = color {
        changes = changes.with_color(raw);
    }
    if let Some(raw) = vehicle_type {
        changes = changes.with_vehicle_type(raw);
    }
    Ok(changes)
}

//! Vehicle registration aggregate root.

use super::{Chassis, MakeName, ModelName, ModelYear, Plate, Renavam, VehicleId, VehicleType};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Vehicle registration aggregate root.
///
/// Fields are mutable only through [`Vehicle::apply`]; external callers
/// never assign them directly. The serde implementations provide the
/// structural snapshot used by boundary adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    plate: Plate,
    chassis: Chassis,
    renavam: Renavam,
    model: ModelName,
    make: MakeName,
    year: ModelYear,
    color: String,
    vehicle_type: VehicleType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for constructing a new vehicle from validated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDescriptor {
    /// Validated license plate.
    pub plate: Plate,
    /// Validated chassis number.
    pub chassis: Chassis,
    /// Validated renavam.
    pub renavam: Renavam,
    /// Validated model name.
    pub model: ModelName,
    /// Validated make name.
    pub make: MakeName,
    /// Validated model year.
    pub year: ModelYear,
    /// Free-form color description.
    pub color: String,
    /// Vehicle classification.
    pub vehicle_type: VehicleType,
}

/// Parameter object for reconstructing a persisted vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedVehicleData {
    /// Persisted vehicle identifier.
    pub id: VehicleId,
    /// Persisted license plate.
    pub plate: Plate,
    /// Persisted chassis number.
    pub chassis: Chassis,
    /// Persisted renavam.
    pub renavam: Renavam,
    /// Persisted model name.
    pub model: ModelName,
    /// Persisted make name.
    pub make: MakeName,
    /// Persisted model year.
    pub year: ModelYear,
    /// Persisted color description.
    pub color: String,
    /// Persisted vehicle classification.
    pub vehicle_type: VehicleType,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial change set for updating a vehicle.
///
/// Every present field carries an already-validated value, so applying a
/// change set cannot fail part-way through: a request that fails
/// validation never produces a change set, and the aggregate is never
/// left partially updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleChanges {
    plate: Option<Plate>,
    chassis: Option<Chassis>,
    renavam: Option<Renavam>,
    model: Option<ModelName>,
    make: Option<MakeName>,
    year: Option<ModelYear>,
    color: Option<String>,
    vehicle_type: Option<VehicleType>,
}

impl VehicleChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement plate.
    #[must_use]
    pub fn with_plate(mut self, plate: Plate) -> Self {
        self.plate = Some(plate);
        self
    }

    /// Sets a replacement chassis number.
    #[must_use]
    pub fn with_chassis(mut self, chassis: Chassis) -> Self {
        self.chassis = Some(chassis);
        self
    }

    /// Sets a replacement renavam.
    #[must_use]
    pub fn with_renavam(mut self, renavam: Renavam) -> Self {
        self.renavam = Some(renavam);
        self
    }

    /// Sets a replacement model name.
    #[must_use]
    pub fn with_model(mut self, model: ModelName) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets a replacement make name.
    #[must_use]
    pub fn with_make(mut self, make: MakeName) -> Self {
        self.make = Some(make);
        self
    }

    /// Sets a replacement model year.
    #[must_use]
    pub const fn with_year(mut self, year: ModelYear) -> Self {
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

    /// Returns the replacement plate, if one is present.
    #[must_use]
    pub const fn plate(&self) -> Option<&Plate> {
        self.plate.as_ref()
    }

    /// Returns the replacement chassis number, if one is present.
    #[must_use]
    pub const fn chassis(&self) -> Option<&Chassis> {
        self.chassis.as_ref()
    }

    /// Returns the replacement renavam, if one is present.
    #[must_use]
    pub const fn renavam(&self) -> Option<&Renavam> {
        self.renavam.as_ref()
    }
}

impl Vehicle {
    /// Creates a new vehicle registration from validated fields.
    ///
    /// A fresh identifier is assigned and both timestamps are stamped from
    /// the clock.
    #[must_use]
    pub fn new(descriptor: VehicleDescriptor, clock: &impl Clock) -> Self {
        let VehicleDescriptor {
            plate,
            chassis,
            renavam,
            model,
            make,
            year,
            color,
            vehicle_type,
        } = descriptor;
        let timestamp = clock.utc();
        Self {
            id: VehicleId::new(),
            plate,
            chassis,
            renavam,
            model,
            make,
            year,
            color,
            vehicle_type,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a vehicle from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedVehicleData) -> Self {
        let PersistedVehicleData {
            id,
            plate,
            chassis,
            renavam,
            model,
            make,
            year,
            color,
            vehicle_type,
            created_at,
            updated_at,
        } = data;
        Self {
            id,
            plate,
            chassis,
            renavam,
            model,
            make,
            year,
            color,
            vehicle_type,
            created_at,
            updated_at,
        }
    }

    /// Returns the vehicle identifier.
    #[must_use]
    pub const fn id(&self) -> VehicleId {
        self.id
    }

    /// Returns the license plate.
    #[must_use]
    pub const fn plate(&self) -> &Plate {
        &self.plate
    }

    /// Returns the chassis number.
    #[must_use]
    pub const fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    /// Returns the renavam.
    #[must_use]
    pub const fn renavam(&self) -> &Renavam {
        &self.renavam
    }

    /// Returns the model name.
    #[must_use]
    pub const fn model(&self) -> &ModelName {
        &self.model
    }

    /// Returns the make name.
    #[must_use]
    pub const fn make(&self) -> &MakeName {
        &self.make
    }

    /// Returns the model year.
    #[must_use]
    pub const fn year(&self) -> ModelYear {
        self.year
    }

    /// Returns the color description.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the vehicle classification.
    #[must_use]
    pub const fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a change set, replacing only the fields it carries.
    ///
    /// `updated_at` is refreshed to the current clock time, also for an
    /// empty change set.
    pub fn apply(&mut self, changes: VehicleChanges, clock: &impl Clock) {
        let VehicleChanges {
            plate,
            chassis,
            renavam,
            model,
            make,
            year,
            color,
            vehicle_type,
        } = changes;

        if let Some(new_plate) = plate {
            self.plate = new_plate;
        }
        if let Some(new_chassis) = chassis {
            self.chassis = new_chassis;
        }
        if let Some(new_renavam) = renavam {
            self.renavam = new_renavam;
        }
        if let Some(new_model) = model {
            self.model = new_model;
        }
        if let Some(new_make) = make {
            self.make = new_make;
        }
        if let Some(new_year) = year {
            self.year = new_year;
        }
        if let Some(new_color) = color {
            self.color = new_color;
        }
        if let Some(new_type) = vehicle_type {
            self.vehicle_type = new_type;
        }

        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

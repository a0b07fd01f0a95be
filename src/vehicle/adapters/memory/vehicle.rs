//! In-memory vehicle repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::vehicle::{
    domain::{Chassis, Plate, Renavam, Vehicle, VehicleId},
    ports::{VehicleRepository, VehicleRepositoryError, VehicleRepositoryResult},
};

/// Thread-safe in-memory vehicle repository.
///
/// Plate, chassis, and renavam lookups are linear scans over the map;
/// secondary indexes are not part of the store contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleRepository {
    state: Arc<RwLock<HashMap<VehicleId, Vehicle>>>,
}

impl InMemoryVehicleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(
        &self,
    ) -> VehicleRepositoryResult<std::sync::RwLockReadGuard<'_, HashMap<VehicleId, Vehicle>>> {
        self.state.read().map_err(|err| {
            VehicleRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(
        &self,
    ) -> VehicleRepositoryResult<std::sync::RwLockWriteGuard<'_, HashMap<VehicleId, Vehicle>>> {
        self.state.write().map_err(|err| {
            VehicleRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn save(&self, vehicle: &Vehicle) -> VehicleRepositoryResult<()> {
        let mut state = self.write_state()?;
        state.insert(vehicle.id(), vehicle.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: VehicleId) -> VehicleRepositoryResult<Option<Vehicle>> {
        let state = self.read_state()?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_plate(&self, plate: &Plate) -> VehicleRepositoryResult<Option<Vehicle>> {
        let state = self.read_state()?;
        Ok(state.values().find(|v| v.plate() == plate).cloned())
    }

    async fn find_by_chassis(
        &self,
        chassis: &Chassis,
    ) -> VehicleRepositoryResult<Option<Vehicle>> {
        let state = self.read_state()?;
        Ok(state.values().find(|v| v.chassis() == chassis).cloned())
    }

    async fn find_by_renavam(
        &self,
        renavam: &Renavam,
    ) -> VehicleRepositoryResult<Option<Vehicle>> {
        let state = self.read_state()?;
        Ok(state.values().find(|v| v.renavam() == renavam).cloned())
    }

    async fn find_all(&self) -> VehicleRepositoryResult<Vec<Vehicle>> {
        let state = self.read_state()?;
        Ok(state.values().cloned().collect())
    }

    async fn update(&self, vehicle: &Vehicle) -> VehicleRepositoryResult<()> {
        let mut state = self.write_state()?;
        if !state.contains_key(&vehicle.id()) {
            return Err(VehicleRepositoryError::NotFound(vehicle.id()));
        }
        state.insert(vehicle.id(), vehicle.clone());
        Ok(())
    }

    async fn delete(&self, id: VehicleId) -> VehicleRepositoryResult<()> {
        let mut state = self.write_state()?;
        if state.remove(&id).is_none() {
            return Err(VehicleRepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn exists(&self, id: VehicleId) -> VehicleRepositoryResult<bool> {
        let state = self.read_state()?;
        Ok(state.contains_key(&id))
    }
}

//! `PostgreSQL` repository implementation for vehicle registration.

use super::{
    models::{NewVehicleRow, VehicleRow},
    schema::vehicles,
};
use crate::vehicle::{
    domain::{
        Chassis, MakeName, ModelName, ModelYear, PersistedVehicleData, Plate, Renavam, Vehicle,
        VehicleId, VehicleType,
    },
    ports::{VehicleRepository, VehicleRepositoryError, VehicleRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by vehicle adapters.
pub type VehiclePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed vehicle repository.
#[derive(Debug, Clone)]
pub struct PostgresVehicleRepository {
    pool: VehiclePgPool,
}

impl PostgresVehicleRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: VehiclePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> VehicleRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> VehicleRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(VehicleRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(VehicleRepositoryError::persistence)?
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn save(&self, vehicle: &Vehicle) -> VehicleRepositoryResult<()> {
        let new_row = to_new_row(vehicle);

        // Insert-or-replace under the id. Unique-index violations on
        // plate/chassis/renavam mean an external writer raced past the
        // service-level checks; they surface as the generic persistence
        // failure and are never retried here.
        self.run_blocking(move |connection| {
            diesel::insert_into(vehicles::table)
                .values(&new_row)
                .on_conflict(vehicles::id)
                .do_update()
                .set(&new_row)
                .execute(connection)
                .map_err(VehicleRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: VehicleId) -> VehicleRepositoryResult<Option<Vehicle>> {
        self.run_blocking(move |connection| {
            let row = vehicles::table
                .find(id.into_inner())
                .select(VehicleRow::as_select())
                .first::<VehicleRow>(connection)
                .optional()
                .map_err(VehicleRepositoryError::persistence)?;
            row.map(row_to_vehicle).transpose()
        })
        .await
    }

    async fn find_by_plate(&self, plate: &Plate) -> VehicleRepositoryResult<Option<Vehicle>> {
        let plate_str = plate.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = vehicles::table
                .filter(vehicles::plate.eq(&plate_str))
                .select(VehicleRow::as_select())
                .first::<VehicleRow>(connection)
                .optional()
                .map_err(VehicleRepositoryError::persistence)?;
            row.map(row_to_vehicle).transpose()
        })
        .await
    }

    async fn find_by_chassis(
        &self,
        chassis: &Chassis,
    ) -> VehicleRepositoryResult<Option<Vehicle>> {
        let chassis_str = chassis.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = vehicles::table
                .filter(vehicles::chassis.eq(&chassis_str))
                .select(VehicleRow::as_select())
                .first::<VehicleRow>(connection)
                .optional()
                .map_err(VehicleRepositoryError::persistence)?;
            row.map(row_to_vehicle).transpose()
        })
        .await
    }

    async fn find_by_renavam(
        &self,
        renavam: &Renavam,
    ) -> VehicleRepositoryResult<Option<Vehicle>> {
        let renavam_str = renavam.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = vehicles::table
                .filter(vehicles::renavam.eq(&renavam_str))
                .select(VehicleRow::as_select())
                .first::<VehicleRow>(connection)
                .optional()
                .map_err(VehicleRepositoryError::persistence)?;
            row.map(row_to_vehicle).transpose()
        })
        .await
    }

    async fn find_all(&self) -> VehicleRepositoryResult<Vec<Vehicle>> {
        self.run_blocking(move |connection| {
            let rows = vehicles::table
                .select(VehicleRow::as_select())
                .load::<VehicleRow>(connection)
                .map_err(VehicleRepositoryError::persistence)?;
            rows.into_iter().map(row_to_vehicle).collect()
        })
        .await
    }

    async fn update(&self, vehicle: &Vehicle) -> VehicleRepositoryResult<()> {
        let vehicle_id = vehicle.id().into_inner();
        let plate_val = vehicle.plate().as_str().to_owned();
        let chassis_val = vehicle.chassis().as_str().to_owned();
        let renavam_val = vehicle.renavam().as_str().to_owned();
        let model_val = vehicle.model().as_str().to_owned();
        let make_val = vehicle.make().as_str().to_owned();
        let year_val = vehicle.year().value();
        let color_val = vehicle.color().to_owned();
        let type_val = vehicle.vehicle_type().as_str().to_owned();
        let updated_val = vehicle.updated_at();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(vehicles::table.find(vehicle_id))
                .set((
                    vehicles::plate.eq(&plate_val),
                    vehicles::chassis.eq(&chassis_val),
                    vehicles::renavam.eq(&renavam_val),
                    vehicles::model.eq(&model_val),
                    vehicles::make.eq(&make_val),
                    vehicles::year.eq(year_val),
                    vehicles::color.eq(&color_val),
                    vehicles::vehicle_type.eq(&type_val),
                    vehicles::updated_at.eq(updated_val),
                ))
                .execute(connection)
                .map_err(VehicleRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(VehicleRepositoryError::NotFound(VehicleId::from_uuid(
                    vehicle_id,
                )));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: VehicleId) -> VehicleRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(vehicles::table.find(id.into_inner()))
                .execute(connection)
                .map_err(VehicleRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(VehicleRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn exists(&self, id: VehicleId) -> VehicleRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                vehicles::table.find(id.into_inner()),
            ))
            .get_result::<bool>(connection)
            .map_err(VehicleRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(vehicle: &Vehicle) -> NewVehicleRow {
    NewVehicleRow {
        id: vehicle.id().into_inner(),
        plate: vehicle.plate().as_str().to_owned(),
        chassis: vehicle.chassis().as_str().to_owned(),
        renavam: vehicle.renavam().as_str().to_owned(),
        model: vehicle.model().as_str().to_owned(),
        make: vehicle.make().as_str().to_owned(),
        year: vehicle.year().value(),
        color: vehicle.color().to_owned(),
        vehicle_type: vehicle.vehicle_type().as_str().to_owned(),
        created_at: vehicle.created_at(),
        updated_at: vehicle.updated_at(),
    }
}

fn row_to_vehicle(row: VehicleRow) -> VehicleRepositoryResult<Vehicle> {
    let VehicleRow {
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
    } = row;

    let parsed_plate = Plate::new(plate).map_err(VehicleRepositoryError::invalid_persisted_data)?;
    let parsed_chassis =
        Chassis::new(chassis).map_err(VehicleRepositoryError::invalid_persisted_data)?;
    let parsed_renavam =
        Renavam::new(renavam).map_err(VehicleRepositoryError::invalid_persisted_data)?;
    let parsed_model =
        ModelName::new(model).map_err(VehicleRepositoryError::invalid_persisted_data)?;
    let parsed_make =
        MakeName::new(make).map_err(VehicleRepositoryError::invalid_persisted_data)?;
    let parsed_type = VehicleType::try_from(vehicle_type.as_str())
        .map_err(VehicleRepositoryError::invalid_persisted_data)?;

    let data = PersistedVehicleData {
        id: VehicleId::from_uuid(id),
        plate: parsed_plate,
        chassis: parsed_chassis,
        renavam: parsed_renavam,
        model: parsed_model,
        make: parsed_make,
        year: ModelYear::from_persisted(year),
        color,
        vehicle_type: parsed_type,
        created_at,
        updated_at,
    };
    Ok(Vehicle::from_persisted(data))
}

//! Diesel row models for vehicle registration persistence.

use super::schema::vehicles;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for vehicle registration records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehicleRow {
    /// Internal vehicle identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// License plate.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub plate: String,
    /// Chassis number.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub chassis: String,
    /// National registration number.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub renavam: String,
    /// Model name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub model: String,
    /// Make name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub make: String,
    /// Model year.
    #[diesel(sql_type = diesel::sql_types::Int4)]
    pub year: i32,
    /// Color description.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub color: String,
    /// Vehicle classification.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub vehicle_type: String,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for vehicle registration records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = vehicles)]
pub struct NewVehicleRow {
    /// Internal vehicle identifier.
    pub id: uuid::Uuid,
    /// License plate.
    pub plate: String,
    /// Chassis number.
    pub chassis: String,
    /// National registration number.
    pub renavam: String,
    /// Model name.
    pub model: String,
    /// Make name.
    pub make: String,
    /// Model year.
    pub year: i32,
    /// Color description.
    pub color: String,
    /// Vehicle classification.
    pub vehicle_type: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

//! Shared test helpers for in-memory vehicle repository integration tests.

use garagem::vehicle::{
    adapters::memory::InMemoryVehicleRepository,
    domain::{
        Chassis, MakeName, ModelName, ModelYear, Plate, Renavam, Vehicle, VehicleDescriptor,
        VehicleType,
    },
};
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryVehicleRepository {
    InMemoryVehicleRepository::new()
}

/// Provides a clock for vehicle creation.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Builds a registered Honda Civic for repository tests.
pub fn civic(clock: &DefaultClock) -> Vehicle {
    Vehicle::new(
        VehicleDescriptor {
            plate: Plate::new("ABC-1234").expect("valid plate"),
            chassis: Chassis::new("1HGBH41JXMN109186").expect("valid chassis"),
            renavam: Renavam::new("12345678901").expect("valid renavam"),
            model: ModelName::new("Civic").expect("valid model"),
            make: MakeName::new("Honda").expect("valid make"),
            year: ModelYear::new(2023, clock).expect("valid year"),
            color: "black".to_owned(),
            vehicle_type: VehicleType::Car,
        },
        clock,
    )
}

/// Builds a second, fully distinct vehicle for multi-record tests.
pub fn corolla(clock: &DefaultClock) -> Vehicle {
    Vehicle::new(
        VehicleDescriptor {
            plate: Plate::new("DEF5G67").expect("valid plate"),
            chassis: Chassis::new("9BWZZZ377VT004251").expect("valid chassis"),
            renavam: Renavam::new("98765432109").expect("valid renavam"),
            model: ModelName::new("Corolla").expect("valid model"),
            make: MakeName::new("Toyota").expect("valid make"),
            year: ModelYear::new(2022, clock).expect("valid year"),
            color: "white".to_owned(),
            vehicle_type: VehicleType::Car,
        },
        clock,
    )
}

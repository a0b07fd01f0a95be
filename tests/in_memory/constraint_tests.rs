//! Uniqueness constraint tests through the full registry stack.
//!
//! Drives `VehicleRegistryService` over the in-memory repository,
//! covering duplicate detection and self-update behaviour.

use crate::in_memory::helpers::{clock, repo, runtime};
use garagem::vehicle::{
    adapters::memory::InMemoryVehicleRepository,
    domain::VehicleType,
    services::{
        RegisterVehicleRequest, UniqueField, UpdateVehicleRequest, VehicleRegistryService,
        VehicleRegistryServiceError,
    },
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

type Registry = VehicleRegistryService<InMemoryVehicleRepository, DefaultClock>;

fn registry(repo: InMemoryVehicleRepository, clock: DefaultClock) -> Registry {
    VehicleRegistryService::new(Arc::new(repo), Arc::new(clock))
}

fn civic_request() -> RegisterVehicleRequest {
    RegisterVehicleRequest::new(
        "ABC-1234",
        "1HGBH41JXMN109186",
        "12345678901",
        "Civic",
        "Honda",
        2023,
        "black",
        VehicleType::Car,
    )
}

/// Tests the registration scenario: a second vehicle reusing the plate
/// is rejected with a conflict naming the plate value.
#[rstest]
fn duplicate_plate_across_the_stack_is_rejected(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let service = registry(repo, clock);

    rt.block_on(service.register(civic_request()))
        .expect("first registration");

    let second = RegisterVehicleRequest::new(
        "ABC-1234",
        "9HGBH41JXMN109189",
        "98765432109",
        "Civic",
        "Honda",
        2023,
        "red",
        VehicleType::Car,
    );
    let result = rt.block_on(service.register(second));

    let conflict = match result {
        Err(VehicleRegistryServiceError::Conflict(conflict)) => conflict,
        other => panic!("expected a conflict, got {other:?}"),
    };
    assert_eq!(conflict.field(), UniqueField::Plate);
    assert_eq!(conflict.value(), "ABC-1234");
}

/// Tests that a vehicle can re-supply its own unique fields on update.
#[rstest]
fn self_update_raises_no_conflict(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let service = registry(repo, clock);

    let created = rt
        .block_on(service.register(civic_request()))
        .expect("registration");

    let updated = rt
        .block_on(service.update(
            created.id(),
            UpdateVehicleRequest::new()
                .with_plate("ABC-1234")
                .with_chassis("1HGBH41JXMN109186")
                .with_renavam("12345678901"),
        ))
        .expect("self-update should succeed");

    assert_eq!(updated.plate(), created.plate());
    assert_eq!(updated.chassis(), created.chassis());
    assert_eq!(updated.renavam(), created.renavam());
}

/// Tests registration, update, and deregistration end to end.
#[rstest]
fn register_update_deregister_lifecycle(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let service = registry(repo, clock);

    let created = rt
        .block_on(service.register(civic_request()))
        .expect("registration");

    let updated = rt
        .block_on(service.update(
            created.id(),
            UpdateVehicleRequest::new().with_color("silver"),
        ))
        .expect("update");
    assert_eq!(updated.color(), "silver");

    let reloaded = rt
        .block_on(service.find_by_id(created.id()))
        .expect("lookup");
    assert_eq!(reloaded, updated);

    rt.block_on(service.deregister(created.id()))
        .expect("deregistration");

    let all = rt.block_on(service.list_all()).expect("listing");
    assert!(all.is_empty());
}

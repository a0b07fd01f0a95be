//! Repository contract tests for `InMemoryVehicleRepository`.
//!
//! Covers save, keyed and field lookups, update, delete, and exists.

use crate::in_memory::helpers::{civic, clock, corolla, repo, runtime};
use garagem::vehicle::{
    adapters::memory::InMemoryVehicleRepository,
    domain::{Plate, VehicleChanges, VehicleId},
    ports::{VehicleRepository, VehicleRepositoryError},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that a saved vehicle is returned unchanged by id lookup.
#[rstest]
fn save_then_find_by_id_round_trip(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let vehicle = civic(&clock);

    rt.block_on(repo.save(&vehicle)).expect("save");
    let found = rt
        .block_on(repo.find_by_id(vehicle.id()))
        .expect("lookup")
        .expect("vehicle present");

    assert_eq!(found, vehicle);
}

/// Tests that unknown ids report absence rather than an error.
#[rstest]
fn find_unknown_id_returns_none(runtime: io::Result<Runtime>, repo: InMemoryVehicleRepository) {
    let rt = runtime.expect("runtime creation");
    let found = rt.block_on(repo.find_by_id(VehicleId::new())).expect("lookup");
    assert!(found.is_none());
}

/// Tests the three unique-field lookups against a populated store.
#[rstest]
fn field_lookups_return_the_matching_vehicle(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let first = civic(&clock);
    let second = corolla(&clock);
    rt.block_on(repo.save(&first)).expect("save first");
    rt.block_on(repo.save(&second)).expect("save second");

    let by_plate = rt
        .block_on(repo.find_by_plate(first.plate()))
        .expect("plate lookup")
        .expect("match");
    assert_eq!(by_plate.id(), first.id());

    let by_chassis = rt
        .block_on(repo.find_by_chassis(second.chassis()))
        .expect("chassis lookup")
        .expect("match");
    assert_eq!(by_chassis.id(), second.id());

    let by_renavam = rt
        .block_on(repo.find_by_renavam(first.renavam()))
        .expect("renavam lookup")
        .expect("match");
    assert_eq!(by_renavam.id(), first.id());
}

/// Tests that field lookups use exact string equality.
#[rstest]
fn plate_lookup_is_exact_match(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(repo.save(&civic(&clock))).expect("save");

    let other_plate = Plate::new("ABC-1235").expect("valid plate");
    let found = rt
        .block_on(repo.find_by_plate(&other_plate))
        .expect("lookup");
    assert!(found.is_none());
}

/// Tests that find_all returns every stored record.
#[rstest]
fn find_all_returns_every_record(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    assert!(rt.block_on(repo.find_all()).expect("empty listing").is_empty());

    rt.block_on(repo.save(&civic(&clock))).expect("save first");
    rt.block_on(repo.save(&corolla(&clock))).expect("save second");

    let all = rt.block_on(repo.find_all()).expect("listing");
    assert_eq!(all.len(), 2);
}

/// Tests that saving under an existing id replaces the record.
#[rstest]
fn save_replaces_record_under_same_id(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let mut vehicle = civic(&clock);
    rt.block_on(repo.save(&vehicle)).expect("save");

    vehicle.apply(VehicleChanges::new().with_color("silver"), &clock);
    rt.block_on(repo.save(&vehicle)).expect("second save");

    let all = rt.block_on(repo.find_all()).expect("listing");
    assert_eq!(all.len(), 1);
    let found = rt
        .block_on(repo.find_by_id(vehicle.id()))
        .expect("lookup")
        .expect("vehicle present");
    assert_eq!(found.color(), "silver");
}

/// Tests that update replaces an existing record.
#[rstest]
fn update_replaces_existing_record(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let mut vehicle = civic(&clock);
    rt.block_on(repo.save(&vehicle)).expect("save");

    vehicle.apply(VehicleChanges::new().with_color("red"), &clock);
    rt.block_on(repo.update(&vehicle)).expect("update");

    let found = rt
        .block_on(repo.find_by_id(vehicle.id()))
        .expect("lookup")
        .expect("vehicle present");
    assert_eq!(found.color(), "red");
}

/// Tests that updating an absent id fails with `NotFound`.
#[rstest]
fn update_unknown_id_fails_not_found(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let vehicle = civic(&clock);

    let result = rt.block_on(repo.update(&vehicle));
    assert!(
        matches!(result, Err(VehicleRepositoryError::NotFound(id)) if id == vehicle.id()),
        "update of an absent id should fail"
    );
}

/// Tests delete followed by lookup and a second delete.
#[rstest]
fn delete_removes_record_and_repeats_fail(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let vehicle = civic(&clock);
    rt.block_on(repo.save(&vehicle)).expect("save");

    rt.block_on(repo.delete(vehicle.id())).expect("delete");

    let found = rt.block_on(repo.find_by_id(vehicle.id())).expect("lookup");
    assert!(found.is_none());

    let second = rt.block_on(repo.delete(vehicle.id()));
    assert!(matches!(second, Err(VehicleRepositoryError::NotFound(_))));
}

/// Tests exists across the save/delete lifecycle.
#[rstest]
fn exists_flips_across_save_and_delete(
    runtime: io::Result<Runtime>,
    repo: InMemoryVehicleRepository,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let vehicle = civic(&clock);

    assert!(!rt.block_on(repo.exists(vehicle.id())).expect("exists check"));

    rt.block_on(repo.save(&vehicle)).expect("save");
    assert!(rt.block_on(repo.exists(vehicle.id())).expect("exists check"));

    rt.block_on(repo.delete(vehicle.id())).expect("delete");
    assert!(!rt.block_on(repo.exists(vehicle.id())).expect("exists check"));
}

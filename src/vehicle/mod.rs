//! Vehicle registration and uniqueness enforcement for Garagem.
//!
//! This module implements the registration core: validating vehicle
//! attributes, keeping plate, chassis, and renavam globally unique, and
//! orchestrating the create/update/find/list/delete workflows against a
//! pluggable store. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

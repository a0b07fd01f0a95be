//! Garagem: motor-vehicle registration core.
//!
//! This crate provides the domain and orchestration layer for registering
//! motor vehicles (cars, motorcycles, trucks) while enforcing that each
//! vehicle's plate, chassis number, and renavam are unique across the
//! whole collection.
//!
//! # Architecture
//!
//! Garagem follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, database)
//!
//! # Modules
//!
//! - [`vehicle`]: Vehicle entity validation, uniqueness enforcement, and
//!   registration workflows

pub mod vehicle;

//! Error types for vehicle domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing vehicle domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleDomainError {
    /// The plate matches neither the legacy nor the current format.
    #[error("plate '{0}' must match the AAA-9999 or AAA9A99 format")]
    InvalidPlate(String),

    /// The chassis number is not exactly 17 characters long.
    #[error("chassis '{0}' must be exactly 17 characters")]
    InvalidChassis(String),

    /// The renavam is not exactly 11 digits.
    #[error("renavam '{0}' must be exactly 11 digits")]
    InvalidRenavam(String),

    /// The model year lies outside the accepted range.
    #[error("model year {value} must lie between 1886 and {max}")]
    YearOutOfRange {
        /// The rejected year.
        value: i32,
        /// The upper bound at validation time (current year plus one).
        max: i32,
    },

    /// The vehicle model is empty after trimming.
    #[error("vehicle model must not be empty")]
    EmptyModel,

    /// The vehicle make is empty after trimming.
    #[error("vehicle make must not be empty")]
    EmptyMake,
}

/// Error returned while parsing vehicle types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown vehicle type: {0}")]
pub struct ParseVehicleTypeError(pub String);

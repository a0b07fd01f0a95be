//! Validated chassis number type.

use super::VehicleDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required chassis number length.
const CHASSIS_LENGTH: usize = 17;

/// Validated 17-character vehicle identification number.
///
/// The value is alphanumeric in practice and case-insensitive to issuers,
/// but it is stored exactly as supplied; lookups compare chassis numbers
/// by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chassis(String);

impl Chassis {
    /// Creates a validated chassis number.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDomainError::InvalidChassis`] when the value is not
    /// exactly 17 characters long.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleDomainError> {
        let raw = value.into();
        if raw.chars().count() == CHASSIS_LENGTH {
            Ok(Self(raw))
        } else {
            Err(VehicleDomainError::InvalidChassis(raw))
        }
    }

    /// Returns the chassis number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Chassis {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Chassis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

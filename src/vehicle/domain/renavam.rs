//! Validated renavam type.

use super::VehicleDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required renavam length.
const RENAVAM_LENGTH: usize = 11;

/// Validated 11-digit national vehicle registration number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Renavam(String);

impl Renavam {
    /// Creates a validated renavam.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDomainError::InvalidRenavam`] when the value is not
    /// exactly 11 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleDomainError> {
        let raw = value.into();
        let is_valid =
            raw.len() == RENAVAM_LENGTH && raw.chars().all(|c| c.is_ascii_digit());

        if is_valid {
            Ok(Self(raw))
        } else {
            Err(VehicleDomainError::InvalidRenavam(raw))
        }
    }

    /// Returns the renavam as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Renavam {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Renavam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

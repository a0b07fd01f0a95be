//! Validated license-plate type.

use super::VehicleDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated vehicle license plate.
///
/// Two national formats are accepted: the legacy `AAA-9999` layout and the
/// current `AAA9A99` layout (letters upper-case in both). The value is
/// stored exactly as supplied; lookups compare plates by exact string
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    /// Creates a validated plate.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDomainError::InvalidPlate`] when the value matches
    /// neither the legacy nor the current plate format.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleDomainError> {
        let raw = value.into();
        if matches_legacy_format(&raw) || matches_current_format(&raw) {
            Ok(Self(raw))
        } else {
            Err(VehicleDomainError::InvalidPlate(raw))
        }
    }

    /// Returns the plate as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Legacy layout: three upper-case letters, a hyphen, four digits.
fn matches_legacy_format(value: &str) -> bool {
    let [a, b, c, sep, d1, d2, d3, d4] = value.as_bytes() else {
        return false;
    };
    [a, b, c].into_iter().all(u8::is_ascii_uppercase)
        && *sep == b'-'
        && [d1, d2, d3, d4].into_iter().all(u8::is_ascii_digit)
}

/// Current layout: three upper-case letters, a digit, a letter, two digits.
fn matches_current_format(value: &str) -> bool {
    let [a, b, c, d1, e, d2, d3] = value.as_bytes() else {
        return false;
    };
    [a, b, c, e].into_iter().all(u8::is_ascii_uppercase)
        && [d1, d2, d3].into_iter().all(u8::is_ascii_digit)
}

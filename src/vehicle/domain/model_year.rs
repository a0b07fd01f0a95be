//! Validated model year type.

use super::VehicleDomainError;
use chrono::Datelike;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Earliest accepted model year (the first motor vehicle).
const MIN_MODEL_YEAR: i32 = 1886;

/// Validated vehicle model year.
///
/// Accepted values lie in `[1886, current_year + 1]`; the one-year
/// tolerance admits pre-registered model years. The current year comes
/// from the injected clock so validation stays deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelYear(i32);

impl ModelYear {
    /// Creates a validated model year.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDomainError::YearOutOfRange`] when the value lies
    /// outside `[1886, current_year + 1]`.
    pub fn new(value: i32, clock: &impl Clock) -> Result<Self, VehicleDomainError> {
        let max = clock.utc().year() + 1;
        if (MIN_MODEL_YEAR..=max).contains(&value) {
            Ok(Self(value))
        } else {
            Err(VehicleDomainError::YearOutOfRange { value, max })
        }
    }

    /// Reconstructs a model year from persisted storage.
    ///
    /// The bound is not re-checked: the value passed validation when it was
    /// first written, and the upper bound only grows over time.
    #[must_use]
    pub const fn from_persisted(value: i32) -> Self {
        Self(value)
    }

    /// Returns the year as a plain integer.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ModelYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

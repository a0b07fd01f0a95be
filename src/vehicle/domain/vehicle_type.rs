//! Vehicle type classification.

use super::ParseVehicleTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a registered vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// A passenger car.
    Car,
    /// A motorcycle.
    Motorcycle,
    /// A truck.
    Truck,
}

impl VehicleType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for VehicleType {
    type Error = ParseVehicleTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            "truck" => Ok(Self::Truck),
            _ => Err(ParseVehicleTypeError(value.to_owned())),
        }
    }
}

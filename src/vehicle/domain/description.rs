//! Validated model and make name types.

use super::VehicleDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated vehicle model name.
///
/// The input is trimmed; empty values after trimming are rejected. No
/// further constraint applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    /// Creates a validated model name.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDomainError::EmptyModel`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(VehicleDomainError::EmptyModel);
        }
        Ok(Self(trimmed))
    }

    /// Returns the model name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated vehicle make (manufacturer) name.
///
/// Same rules as [`ModelName`]: trimmed, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MakeName(String);

impl MakeName {
    /// Creates a validated make name.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDomainError::EmptyMake`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(VehicleDomainError::EmptyMake);
        }
        Ok(Self(trimmed))
    }

    /// Returns the make name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MakeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MakeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

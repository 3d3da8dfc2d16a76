use super::{Asset, Coordinates};
use std::fmt;

/// Validation errors for operator-authored asset edits
#[derive(Debug, Clone, PartialEq)]
pub enum AssetValidationError {
    MissingId,
    MissingName,
    InvalidFuelLevel(f64),
    InvalidSpeed(f64),
    InvalidCoordinates { field: &'static str, lat: f64, lng: f64 },
}

impl fmt::Display for AssetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetValidationError::MissingId => write!(f, "id is required"),
            AssetValidationError::MissingName => write!(f, "name is required"),
            AssetValidationError::InvalidFuelLevel(v) => {
                write!(f, "fuelLevel must be between 0 and 100, got {}", v)
            }
            AssetValidationError::InvalidSpeed(v) => {
                write!(f, "speed must be a non-negative number, got {}", v)
            }
            AssetValidationError::InvalidCoordinates { field, lat, lng } => {
                write!(f, "{} is not a valid position: ({}, {})", field, lat, lng)
            }
        }
    }
}

impl std::error::Error for AssetValidationError {}

/// Validates a full-replace edit before it reaches the store.
///
/// Rules:
/// - id and name must be non-empty
/// - fuelLevel: finite, within [0, 100]
/// - speed: finite, non-negative
/// - location/destination: finite, lat in [-90, 90], lng in [-180, 180]
pub fn validate_edit(asset: &Asset) -> Result<(), AssetValidationError> {
    if asset.id.trim().is_empty() {
        return Err(AssetValidationError::MissingId);
    }
    if asset.name.trim().is_empty() {
        return Err(AssetValidationError::MissingName);
    }

    if !asset.fuel_level.is_finite() || !(0.0..=100.0).contains(&asset.fuel_level) {
        return Err(AssetValidationError::InvalidFuelLevel(asset.fuel_level));
    }

    if !asset.speed.is_finite() || asset.speed < 0.0 {
        return Err(AssetValidationError::InvalidSpeed(asset.speed));
    }

    check_position("location", &asset.location)?;
    check_position("destination", &asset.destination)?;

    Ok(())
}

fn check_position(field: &'static str, pos: &Coordinates) -> Result<(), AssetValidationError> {
    let valid = pos.lat.is_finite()
        && pos.lng.is_finite()
        && (-90.0..=90.0).contains(&pos.lat)
        && (-180.0..=180.0).contains(&pos.lng);

    if valid {
        Ok(())
    } else {
        Err(AssetValidationError::InvalidCoordinates {
            field,
            lat: pos.lat,
            lng: pos.lng,
        })
    }
}

use serde::{Deserialize, Serialize};

pub mod seed;
mod validation;

pub use validation::{validate_edit, AssetValidationError};

/// Geographic position in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Straight-line distance in degrees (good enough for arrival checks)
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        (other.lat - self.lat).hypot(other.lng - self.lng)
    }
}

/// Operational status of a tracked asset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Moving,
    Idle,
    Stopped,
    Breakdown,
    Maintenance,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Moving => "MOVING",
            AssetStatus::Idle => "IDLE",
            AssetStatus::Stopped => "STOPPED",
            AssetStatus::Breakdown => "BREAKDOWN",
            AssetStatus::Maintenance => "MAINTENANCE",
        }
    }

    /// Parse the wire form used by query strings (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "MOVING" => Some(AssetStatus::Moving),
            "IDLE" => Some(AssetStatus::Idle),
            "STOPPED" => Some(AssetStatus::Stopped),
            "BREAKDOWN" => Some(AssetStatus::Breakdown),
            "MAINTENANCE" => Some(AssetStatus::Maintenance),
            _ => None,
        }
    }
}

/// Kind of vehicle, used by the dashboard for grouping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetCategory {
    #[serde(rename = "Heavy Transport")]
    HeavyTransport,
    Shuttle,
    Construction,
    Support,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::HeavyTransport => "Heavy Transport",
            AssetCategory::Shuttle => "Shuttle",
            AssetCategory::Construction => "Construction",
            AssetCategory::Support => "Support",
        }
    }

    /// Parse a query-string category. Case-insensitive; spaces, dashes and
    /// underscores are interchangeable ("heavy-transport").
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "heavytransport" => Some(AssetCategory::HeavyTransport),
            "shuttle" => Some(AssetCategory::Shuttle),
            "construction" => Some(AssetCategory::Construction),
            "support" => Some(AssetCategory::Support),
            _ => None,
        }
    }
}

/// A tracked fleet asset (truck, shuttle, crane, ...)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique asset identifier (e.g., "SRC-104")
    pub id: String,

    /// Display name (e.g., "Scania R500")
    pub name: String,

    pub category: AssetCategory,

    /// Driver display name
    pub driver: String,

    pub cargo_type: String,

    pub status: AssetStatus,

    /// Current position
    pub location: Coordinates,

    /// Position the asset is heading towards
    pub destination: Coordinates,

    /// Fuel level in percent, always within [0, 100]
    pub fuel_level: f64,

    /// Speed in km/h
    pub speed: f64,

    /// Optional service and financial record, flattened into the asset
    #[serde(flatten)]
    pub details: AssetDetails,
}

/// Optional per-asset fields carried through edits untouched by the
/// simulation. Absent values are omitted on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Cargo temperature (reefer units)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// ISO date of the last service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<String>,

    /// Distance left until the next service; negative when overdue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_service_mileage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_month_to_date: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_month_to_date: Option<f64>,

    /// CO2 emitted this month (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_emissions: Option<f64>,
}

impl Asset {
    pub fn is_moving(&self) -> bool {
        self.status == AssetStatus::Moving
    }
}

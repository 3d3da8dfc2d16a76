use crate::asset::{Asset, AssetStatus, Coordinates};
use crate::notification::{Alert, NewNotification, NotificationKind};
use std::collections::HashMap;

/// A qualifying change observed between two consecutive snapshots
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// Status moved from anything else into Breakdown
    Breakdown {
        asset_id: String,
        name: String,
        location: Coordinates,
    },
    /// Fuel crossed from above the threshold to at or below it
    LowFuel {
        asset_id: String,
        name: String,
        fuel_level: f64,
    },
}

impl Transition {
    pub fn asset_id(&self) -> &str {
        match self {
            Transition::Breakdown { asset_id, .. } | Transition::LowFuel { asset_id, .. } => asset_id,
        }
    }

    /// Log entry describing this transition
    pub fn notification(&self) -> NewNotification {
        match self {
            Transition::Breakdown { .. } => NewNotification::new(
                NotificationKind::Error,
                "Asset Breakdown",
                self.message(),
            ),
            Transition::LowFuel { .. } => NewNotification::new(
                NotificationKind::Warning,
                "Low Fuel Warning",
                self.message(),
            ),
        }
    }

    /// Immediate toast, raised for breakdowns only
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Transition::Breakdown { .. } => Some(Alert::new(NotificationKind::Error, self.message())),
            Transition::LowFuel { .. } => None,
        }
    }

    fn message(&self) -> String {
        match self {
            Transition::Breakdown {
                asset_id,
                name,
                location,
            } => format!(
                "Vehicle {} ({}) has broken down near {:.2}, {:.2}",
                name, asset_id, location.lat, location.lng
            ),
            Transition::LowFuel {
                name, fuel_level, ..
            } => format!(
                "{} is running low on fuel ({}%)",
                name,
                fuel_level.round()
            ),
        }
    }
}

/// Compare two snapshots by asset id and collect qualifying transitions.
///
/// Assets present only in `next` are ignored. Output follows `next` order,
/// with a breakdown listed before a low-fuel crossing for the same asset.
pub fn detect_transitions(
    previous: &[Asset],
    next: &[Asset],
    low_fuel_threshold: f64,
) -> Vec<Transition> {
    let by_id: HashMap<&str, &Asset> = previous.iter().map(|a| (a.id.as_str(), a)).collect();

    let mut transitions = Vec::new();

    for asset in next {
        let Some(before) = by_id.get(asset.id.as_str()) else {
            continue;
        };

        if before.status != AssetStatus::Breakdown && asset.status == AssetStatus::Breakdown {
            transitions.push(Transition::Breakdown {
                asset_id: asset.id.clone(),
                name: asset.name.clone(),
                location: asset.location,
            });
        }

        if before.fuel_level > low_fuel_threshold && asset.fuel_level <= low_fuel_threshold {
            transitions.push(Transition::LowFuel {
                asset_id: asset.id.clone(),
                name: asset.name.clone(),
                fuel_level: asset.fuel_level,
            });
        }
    }

    transitions
}

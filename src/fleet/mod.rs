// Fleet store and the task that owns it (ticks + operator commands)

mod service;
mod store;
mod summary;

pub use service::{
    FleetCommand, FleetHandle, FleetService, FleetSnapshot, NotificationSummary, SimulationStatus,
};
pub use store::FleetStore;
pub use summary::FleetSummary;

use crate::asset::{Asset, AssetValidationError};
use crate::notification::{Alert, Notification};
use std::fmt;


/// Change broadcast to live subscribers (WebSocket clients)
#[derive(Clone, Debug)]
pub enum FleetEvent {
    /// New asset collection after a tick or an edit
    AssetsUpdated { tick: u64, assets: Vec<Asset> },

    /// A notification was appended to the log
    NotificationAdded(Notification),

    /// Ephemeral toast
    Alert(Alert),

    /// Log was marked read or cleared
    NotificationLogChanged { total: usize, unread_count: usize },

    /// Simulation was started or stopped
    SimulationStateChanged { running: bool },
}

/// Errors surfaced by fleet operations
#[derive(Debug, Clone, PartialEq)]
pub enum FleetError {
    AssetNotFound(String),
    IdMismatch { path: String, body: String },
    Invalid(AssetValidationError),
    /// The owning task has stopped
    ServiceUnavailable,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::AssetNotFound(id) => write!(f, "asset '{}' not found", id),
            FleetError::IdMismatch { path, body } => {
                write!(f, "asset id '{}' does not match path id '{}'", body, path)
            }
            FleetError::Invalid(e) => write!(f, "invalid asset: {}", e),
            FleetError::ServiceUnavailable => write!(f, "fleet service is not running"),
        }
    }
}

impl std::error::Error for FleetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FleetError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

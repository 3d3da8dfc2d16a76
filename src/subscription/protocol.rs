use crate::asset::Asset;
use crate::notification::{Alert, Notification};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client → Server message types
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "subscribe")]
    Subscribe { asset_id: String },
    #[serde(rename = "unsubscribe")]
    Unsubscribe { asset_id: String },
}

/// Server → Client: asset positions after a tick or edit
#[derive(Debug, Clone, Serialize)]
pub struct AssetUpdateMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub tick: u64,
    pub assets: Vec<Asset>,
    pub timestamp: DateTime<Utc>,
}

impl AssetUpdateMessage {
    pub fn new(tick: u64, assets: Vec<Asset>) -> Self {
        Self {
            msg_type: "asset_update".to_string(),
            tick,
            assets,
            timestamp: Utc::now(),
        }
    }
}

/// Server → Client: new notification log entry
#[derive(Debug, Clone, Serialize)]
pub struct NotificationMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub notification: Notification,
}

impl From<Notification> for NotificationMessage {
    fn from(notification: Notification) -> Self {
        Self {
            msg_type: "notification".to_string(),
            notification,
        }
    }
}

/// Server → Client: ephemeral toast
#[derive(Debug, Clone, Serialize)]
pub struct AlertMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub alert: Alert,
}

impl From<Alert> for AlertMessage {
    fn from(alert: Alert) -> Self {
        Self {
            msg_type: "alert".to_string(),
            alert,
        }
    }
}

/// Server → Client: log was marked read or cleared
#[derive(Debug, Clone, Serialize)]
pub struct NotificationLogMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub total: usize,
    #[serde(rename = "unreadCount")]
    pub unread_count: usize,
}

impl NotificationLogMessage {
    pub fn new(total: usize, unread_count: usize) -> Self {
        Self {
            msg_type: "notification_log".to_string(),
            total,
            unread_count,
        }
    }
}

/// Server → Client: simulation started/stopped
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStateMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub running: bool,
}

impl SimulationStateMessage {
    pub fn new(running: bool) -> Self {
        Self {
            msg_type: "simulation_state".to_string(),
            running,
        }
    }
}

/// Server → Client: Error message
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: String) -> Self {
        Self {
            msg_type: "error".to_string(),
            error,
        }
    }
}

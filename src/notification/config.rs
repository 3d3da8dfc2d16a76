use serde::{Deserialize, Serialize};

/// Notification log and alert thresholds
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Maximum notifications kept (oldest evicted first)
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Fuel percentage at or below which a low-fuel warning fires
    #[serde(default = "default_low_fuel_threshold")]
    pub low_fuel_threshold: f64,
}

fn default_capacity() -> usize {
    50
}

fn default_low_fuel_threshold() -> f64 {
    15.0
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            low_fuel_threshold: default_low_fuel_threshold(),
        }
    }
}

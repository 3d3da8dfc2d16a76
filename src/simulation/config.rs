use serde::{Deserialize, Serialize};

/// Tuning knobs for the position simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Interval between ticks (milliseconds)
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Fraction of the remaining distance covered per tick
    #[serde(default = "default_move_fraction")]
    pub move_fraction: f64,

    /// Upper bound of the per-tick fuel burn (percentage points)
    #[serde(default = "default_max_fuel_burn")]
    pub max_fuel_burn: f64,

    /// Per-tick probability that a moving asset breaks down
    #[serde(default = "default_breakdown_probability")]
    pub breakdown_probability: f64,

    /// Distance (degrees) below which an asset snaps to its destination.
    /// Zero disables arrival.
    #[serde(default = "default_arrival_epsilon")]
    pub arrival_epsilon: f64,

    /// Start ticking as soon as the service boots
    #[serde(default = "default_autostart")]
    pub autostart: bool,

    /// Fixed RNG seed for reproducible runs; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tick_interval_ms() -> u64 {
    2000
}

fn default_move_fraction() -> f64 {
    0.01
}

fn default_max_fuel_burn() -> f64 {
    0.2
}

fn default_breakdown_probability() -> f64 {
    0.005
}

fn default_arrival_epsilon() -> f64 {
    1e-4
}

fn default_autostart() -> bool {
    true
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            move_fraction: default_move_fraction(),
            max_fuel_burn: default_max_fuel_burn(),
            breakdown_probability: default_breakdown_probability(),
            arrival_epsilon: default_arrival_epsilon(),
            autostart: default_autostart(),
            seed: None,
        }
    }
}

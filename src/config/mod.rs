use anyhow::{ensure, Context, Result};
use serde::Deserialize;

// Re-export module config types
pub use crate::notification::NotificationConfig;
pub use crate::simulation::SimulationConfig;

/// Complete service configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// HTTP/WebSocket API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Socket address the server listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Events a WebSocket subscriber may fall behind before skipping
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_event_buffer() -> usize {
    256
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            event_buffer: default_event_buffer(),
        }
    }
}

impl FleetConfig {
    /// Apply `FLEET_*` environment overrides on top of file/default values
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Check ranges the simulation relies on: fuel never rises and
    /// movement stays between an asset and its destination.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;

        ensure!(
            sim.tick_interval_ms > 0,
            "simulation.tick_interval_ms must be greater than 0"
        );
        ensure!(
            (0.0..=1.0).contains(&sim.move_fraction),
            "simulation.move_fraction must be within [0, 1], got {}",
            sim.move_fraction
        );
        ensure!(
            sim.max_fuel_burn.is_finite() && sim.max_fuel_burn >= 0.0,
            "simulation.max_fuel_burn must be a non-negative number, got {}",
            sim.max_fuel_burn
        );
        ensure!(
            (0.0..=1.0).contains(&sim.breakdown_probability),
            "simulation.breakdown_probability must be within [0, 1], got {}",
            sim.breakdown_probability
        );
        ensure!(
            sim.arrival_epsilon.is_finite() && sim.arrival_epsilon >= 0.0,
            "simulation.arrival_epsilon must be a non-negative number, got {}",
            sim.arrival_epsilon
        );
        ensure!(
            self.notifications.capacity > 0,
            "notifications.capacity must be greater than 0"
        );
        ensure!(
            self.notifications.low_fuel_threshold.is_finite(),
            "notifications.low_fuel_threshold must be a number"
        );

        Ok(())
    }

    /// Override lookup is injectable so tests don't touch the process env.
    /// Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("FLEET_BIND_ADDRESS") {
            self.api.bind_address = v;
        }
        if let Some(v) = lookup("FLEET_SIMULATION_SEED") {
            if let Ok(seed) = v.parse::<u64>() {
                self.simulation.seed = Some(seed);
            }
        }
        if let Some(v) = lookup("FLEET_TICK_INTERVAL_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                self.simulation.tick_interval_ms = ms;
            }
        }
        if let Some(v) = lookup("FLEET_SIMULATION_AUTOSTART") {
            if let Ok(b) = v.parse::<bool>() {
                self.simulation.autostart = b;
            }
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<FleetConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path))?;
    let config: FleetConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file {}", path))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FleetConfig::default();
        assert_eq!(config.simulation.tick_interval_ms, 2000);
        assert_eq!(config.simulation.move_fraction, 0.01);
        assert_eq!(config.simulation.max_fuel_burn, 0.2);
        assert_eq!(config.simulation.breakdown_probability, 0.005);
        assert!(config.simulation.autostart);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.notifications.capacity, 50);
        assert_eq!(config.notifications.low_fuel_threshold, 15.0);
        assert_eq!(config.api.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
            [simulation]
            tick_interval_ms = 500
            move_fraction = 0.05
            max_fuel_burn = 1.0
            breakdown_probability = 0.0
            arrival_epsilon = 0.0
            autostart = false
            seed = 42

            [notifications]
            capacity = 10
            low_fuel_threshold = 20.0

            [api]
            bind_address = "127.0.0.1:8080"
            event_buffer = 16
        "#;

        let config: FleetConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.simulation.tick_interval_ms, 500);
        assert_eq!(config.simulation.move_fraction, 0.05);
        assert_eq!(config.simulation.breakdown_probability, 0.0);
        assert!(!config.simulation.autostart);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.notifications.capacity, 10);
        assert_eq!(config.notifications.low_fuel_threshold, 20.0);
        assert_eq!(config.api.bind_address, "127.0.0.1:8080");
        assert_eq!(config.api.event_buffer, 16);
    }

    #[test]
    fn test_partial_config() {
        // Missing sections and fields fall back to defaults
        let toml = r#"
            [simulation]
            tick_interval_ms = 1000
        "#;

        let config: FleetConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.simulation.tick_interval_ms, 1000);
        assert_eq!(config.simulation.move_fraction, 0.01); // Default
        assert_eq!(config.notifications.capacity, 50); // Default
        assert_eq!(config.api.event_buffer, 256); // Default
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[notifications]\ncapacity = 5").unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.notifications.capacity, 5);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/fleetwatch.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FleetConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_fuel_burn_rejected() {
        let mut config = FleetConfig::default();
        config.simulation.max_fuel_burn = -10.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_fuel_burn"));
    }

    #[test]
    fn test_out_of_range_fractions_rejected() {
        let mut config = FleetConfig::default();
        config.simulation.move_fraction = 1.5;
        assert!(config.validate().is_err());

        let mut config = FleetConfig::default();
        config.simulation.move_fraction = -0.01;
        assert!(config.validate().is_err());

        let mut config = FleetConfig::default();
        config.simulation.breakdown_probability = 2.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("breakdown_probability"));

        let mut config = FleetConfig::default();
        config.simulation.breakdown_probability = f64::NAN;
        assert!(config.validate().is_err());

        // Bounds are inclusive
        let mut config = FleetConfig::default();
        config.simulation.move_fraction = 1.0;
        config.simulation.breakdown_probability = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_and_capacity_rejected() {
        let mut config = FleetConfig::default();
        config.simulation.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = FleetConfig::default();
        config.notifications.capacity = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nmax_fuel_burn = -10.0").unwrap();

        let err = load_config(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        assert!(format!("{:#}", err).contains("max_fuel_burn"));
    }

    #[test]
    fn test_invalid_override_caught_by_validate() {
        let mut config = FleetConfig::default();
        config.apply_overrides(|key| {
            (key == "FLEET_TICK_INTERVAL_MS").then(|| "0".to_string())
        });
        assert_eq!(config.simulation.tick_interval_ms, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("FLEET_BIND_ADDRESS", "127.0.0.1:9000"),
            ("FLEET_SIMULATION_SEED", "7"),
            ("FLEET_TICK_INTERVAL_MS", "not-a-number"),
            ("FLEET_SIMULATION_AUTOSTART", "false"),
        ]);

        let mut config = FleetConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.bind_address, "127.0.0.1:9000");
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.tick_interval_ms, 2000); // Ignored
        assert!(!config.simulation.autostart);
    }
}

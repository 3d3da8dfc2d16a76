use crate::asset::{seed::initial_fleet, validate_edit, Asset};
use crate::config::FleetConfig;
use crate::fleet::{FleetError, FleetSummary};
use crate::notification::{Alert, Notification, NotificationConfig, NotificationKind, Notifier};
use crate::simulation::{RandomSource, RngSource, Scheduler, SimulationConfig};
use tracing::info;

/// Single owner of the asset collection and the notification log.
///
/// Every mutation goes through `&mut self`; the service task is the only
/// holder, so no locking is needed around simulation state.
pub struct FleetStore {
    scheduler: Scheduler,
    notifier: Notifier,
}

impl FleetStore {
    pub fn new(
        assets: Vec<Asset>,
        rng: Box<dyn RandomSource + Send>,
        simulation: SimulationConfig,
        notifications: &NotificationConfig,
    ) -> Self {
        Self {
            scheduler: Scheduler::new(assets, rng, simulation),
            notifier: Notifier::new(notifications),
        }
    }

    /// Seed fleet with the configured (or entropy-seeded) generator
    pub fn from_config(config: &FleetConfig) -> Self {
        let rng = RngSource::from_seed(config.simulation.seed);
        Self::new(
            initial_fleet(),
            Box::new(rng),
            config.simulation.clone(),
            &config.notifications,
        )
    }

    /// Run one simulation step and detect transitions against the
    /// previous snapshot.
    pub fn tick(&mut self) -> &[Asset] {
        self.scheduler.advance(&mut self.notifier)
    }

    /// Full-replace edit of the asset identified by `id`.
    ///
    /// The edit is diffed like a tick, so editing an asset into Breakdown
    /// raises the usual alert while a refuel stays silent.
    pub fn apply_edit(&mut self, id: &str, asset: Asset) -> Result<Asset, FleetError> {
        if asset.id != id {
            return Err(FleetError::IdMismatch {
                path: id.to_string(),
                body: asset.id,
            });
        }
        validate_edit(&asset).map_err(FleetError::Invalid)?;

        let updated = asset.clone();
        self.scheduler
            .replace(asset, &mut self.notifier)
            .ok_or_else(|| FleetError::AssetNotFound(id.to_string()))?;

        info!(asset_id = %id, status = updated.status.as_str(), "Asset updated");
        self.notifier.raise_alert(Alert::new(
            NotificationKind::Success,
            format!("Asset {} updated successfully", id),
        ));

        Ok(updated)
    }

    pub fn assets(&self) -> &[Asset] {
        self.scheduler.assets()
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.scheduler.assets().iter().find(|a| a.id == id)
    }

    /// Dashboard aggregates over the current collection
    pub fn summary(&self) -> FleetSummary {
        FleetSummary::from_assets(self.scheduler.assets())
    }

    pub fn tick_count(&self) -> u64 {
        self.scheduler.tick_count()
    }

    pub fn simulation_config(&self) -> &SimulationConfig {
        self.scheduler.config()
    }

    /// Notification log, most recent first
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifier.log().entries()
    }

    pub fn unread_count(&self) -> usize {
        self.notifier.log().unread_count()
    }

    pub fn mark_all_read(&mut self) -> usize {
        self.notifier.log_mut().mark_all_read()
    }

    pub fn clear_notifications(&mut self) -> usize {
        self.notifier.log_mut().clear()
    }

    /// Notifications and alerts produced since the last call
    pub fn drain_events(&mut self) -> (Vec<Notification>, Vec<Alert>) {
        self.notifier.drain()
    }
}

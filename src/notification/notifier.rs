use crate::asset::Asset;
use crate::notification::{
    detect_transitions, Alert, NotificationConfig, Notification, NotificationLog, Transition,
};
use crate::simulation::TickObserver;
use tracing::warn;

/// Turns snapshot transitions into logged notifications and pending alerts.
///
/// Newly created notifications and alerts accumulate until the owner drains
/// them with [`Notifier::drain`] to fan them out to subscribers.
pub struct Notifier {
    log: NotificationLog,
    low_fuel_threshold: f64,
    created: Vec<Notification>,
    alerts: Vec<Alert>,
}

impl Notifier {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            log: NotificationLog::new(config.capacity),
            low_fuel_threshold: config.low_fuel_threshold,
            created: Vec::new(),
            alerts: Vec::new(),
        }
    }

    pub fn log(&self) -> &NotificationLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut NotificationLog {
        &mut self.log
    }

    /// Record an operator-facing alert that has no log entry
    pub fn raise_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// Take everything created since the last drain
    pub fn drain(&mut self) -> (Vec<Notification>, Vec<Alert>) {
        (
            std::mem::take(&mut self.created),
            std::mem::take(&mut self.alerts),
        )
    }

    fn record(&mut self, transition: Transition) {
        match &transition {
            Transition::Breakdown { asset_id, location, .. } => {
                warn!(
                    asset_id = %asset_id,
                    lat = location.lat,
                    lng = location.lng,
                    "Asset breakdown detected"
                );
            }
            Transition::LowFuel {
                asset_id,
                fuel_level,
                ..
            } => {
                warn!(asset_id = %asset_id, fuel_level = fuel_level, "Asset low on fuel");
            }
        }

        let notification = self.log.push(transition.notification());
        self.created.push(notification);

        if let Some(alert) = transition.alert() {
            self.alerts.push(alert);
        }
    }
}

impl TickObserver for Notifier {
    fn on_tick(&mut self, previous: &[Asset], next: &[Asset]) {
        for transition in detect_transitions(previous, next, self.low_fuel_threshold) {
            self.record(transition);
        }
    }
}

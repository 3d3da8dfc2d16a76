use crate::asset::Asset;
use crate::fleet::{FleetError, FleetEvent, FleetStore, FleetSummary};
use crate::notification::Notification;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

/// Requests served by the fleet task
pub enum FleetCommand {
    ListAssets {
        reply: oneshot::Sender<Vec<Asset>>,
    },
    /// Assets together with the tick that produced them
    Snapshot {
        reply: oneshot::Sender<FleetSnapshot>,
    },
    GetAsset {
        id: String,
        reply: oneshot::Sender<Option<Asset>>,
    },
    ApplyEdit {
        id: String,
        asset: Asset,
        reply: oneshot::Sender<Result<Asset, FleetError>>,
    },
    Summary {
        reply: oneshot::Sender<FleetSummary>,
    },
    ListNotifications {
        reply: oneshot::Sender<NotificationSummary>,
    },
    MarkAllRead {
        reply: oneshot::Sender<NotificationSummary>,
    },
    ClearNotifications {
        reply: oneshot::Sender<NotificationSummary>,
    },
    GetSimulation {
        reply: oneshot::Sender<SimulationStatus>,
    },
    SetRunning {
        running: bool,
        reply: oneshot::Sender<SimulationStatus>,
    },
    /// Advance one tick immediately, whether or not the timer is running
    Step {
        reply: oneshot::Sender<SimulationStatus>,
    },
}

/// Notification log as seen by the presentation layer
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

/// Consistent view of the collection at one tick
#[derive(Clone, Debug, PartialEq)]
pub struct FleetSnapshot {
    pub tick: u64,
    pub assets: Vec<Asset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStatus {
    pub running: bool,
    pub tick_count: u64,
    pub tick_interval_ms: u64,
}

/// Owns the [`FleetStore`] and serializes ticks and commands on one task
pub struct FleetService {
    store: FleetStore,
    commands: mpsc::Receiver<FleetCommand>,
    events: broadcast::Sender<FleetEvent>,
    running: bool,
}

impl FleetService {
    /// Build the service and its handle. `event_buffer` bounds how far a
    /// slow subscriber may lag before it starts skipping events.
    pub fn new(store: FleetStore, event_buffer: usize) -> (Self, FleetHandle) {
        let (command_tx, command_rx) = mpsc::channel(64);
        let (event_tx, _) = broadcast::channel(event_buffer.max(1));
        let running = store.simulation_config().autostart;

        let service = Self {
            store,
            commands: command_rx,
            events: event_tx.clone(),
            running,
        };
        let handle = FleetHandle {
            commands: command_tx,
            events: event_tx,
        };

        (service, handle)
    }

    /// Build the service and run it on the current runtime
    pub fn spawn(store: FleetStore, event_buffer: usize) -> FleetHandle {
        let (service, handle) = Self::new(store, event_buffer);
        tokio::spawn(service.run());
        handle
    }

    /// Main loop. Ends when every handle has been dropped.
    pub async fn run(mut self) {
        let period = Duration::from_millis(self.store.simulation_config().tick_interval_ms.max(1));

        // First tick fires one full period after start
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            tick_interval_ms = period.as_millis() as u64,
            assets = self.store.assets().len(),
            running = self.running,
            "Fleet service started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick(), if self.running => {
                    self.tick();
                }

                command = self.commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };

                    let was_running = self.running;
                    self.handle(command);
                    if !was_running && self.running {
                        ticker.reset();
                    }
                }
            }
        }

        info!("Fleet service stopped");
    }

    fn tick(&mut self) {
        self.store.tick();
        self.publish_assets();
        self.publish_pending();
    }

    fn handle(&mut self, command: FleetCommand) {
        match command {
            FleetCommand::ListAssets { reply } => {
                let _ = reply.send(self.store.assets().to_vec());
            }
            FleetCommand::Snapshot { reply } => {
                let _ = reply.send(FleetSnapshot {
                    tick: self.store.tick_count(),
                    assets: self.store.assets().to_vec(),
                });
            }
            FleetCommand::GetAsset { id, reply } => {
                let _ = reply.send(self.store.asset(&id).cloned());
            }
            FleetCommand::ApplyEdit { id, asset, reply } => {
                let result = self.store.apply_edit(&id, asset);
                match &result {
                    Ok(_) => {
                        self.publish_assets();
                        self.publish_pending();
                    }
                    Err(e) => warn!(asset_id = %id, error = %e, "Asset edit rejected"),
                }
                let _ = reply.send(result);
            }
            FleetCommand::Summary { reply } => {
                let _ = reply.send(self.store.summary());
            }
            FleetCommand::ListNotifications { reply } => {
                let _ = reply.send(self.notification_summary());
            }
            FleetCommand::MarkAllRead { reply } => {
                if self.store.mark_all_read() > 0 {
                    self.publish_log_changed();
                }
                let _ = reply.send(self.notification_summary());
            }
            FleetCommand::ClearNotifications { reply } => {
                if self.store.clear_notifications() > 0 {
                    self.publish_log_changed();
                }
                let _ = reply.send(self.notification_summary());
            }
            FleetCommand::GetSimulation { reply } => {
                let _ = reply.send(self.status());
            }
            FleetCommand::SetRunning { running, reply } => {
                if self.running != running {
                    self.running = running;
                    info!(running = running, "Simulation state changed");
                    let _ = self.events.send(FleetEvent::SimulationStateChanged { running });
                }
                let _ = reply.send(self.status());
            }
            FleetCommand::Step { reply } => {
                self.tick();
                let _ = reply.send(self.status());
            }
        }
    }

    fn notification_summary(&self) -> NotificationSummary {
        NotificationSummary {
            notifications: self.store.notifications(),
            unread_count: self.store.unread_count(),
        }
    }

    fn status(&self) -> SimulationStatus {
        SimulationStatus {
            running: self.running,
            tick_count: self.store.tick_count(),
            tick_interval_ms: self.store.simulation_config().tick_interval_ms,
        }
    }

    // Send errors only mean nobody is subscribed right now

    fn publish_assets(&self) {
        let _ = self.events.send(FleetEvent::AssetsUpdated {
            tick: self.store.tick_count(),
            assets: self.store.assets().to_vec(),
        });
    }

    fn publish_pending(&mut self) {
        let (notifications, alerts) = self.store.drain_events();
        for notification in notifications {
            let _ = self.events.send(FleetEvent::NotificationAdded(notification));
        }
        for alert in alerts {
            let _ = self.events.send(FleetEvent::Alert(alert));
        }
    }

    fn publish_log_changed(&self) {
        let _ = self.events.send(FleetEvent::NotificationLogChanged {
            total: self.store.notifications().len(),
            unread_count: self.store.unread_count(),
        });
    }
}

/// Cloneable front end to the fleet task
#[derive(Clone)]
pub struct FleetHandle {
    commands: mpsc::Sender<FleetCommand>,
    events: broadcast::Sender<FleetEvent>,
}

impl FleetHandle {
    /// Subscribe to fleet events
    pub fn subscribe(&self) -> broadcast::Receiver<FleetEvent> {
        self.events.subscribe()
    }

    pub async fn assets(&self) -> Result<Vec<Asset>, FleetError> {
        self.request(|reply| FleetCommand::ListAssets { reply }).await
    }

    /// Assets and tick count read in a single command, so no tick can
    /// fall between them
    pub async fn snapshot(&self) -> Result<FleetSnapshot, FleetError> {
        self.request(|reply| FleetCommand::Snapshot { reply }).await
    }

    pub async fn summary(&self) -> Result<FleetSummary, FleetError> {
        self.request(|reply| FleetCommand::Summary { reply }).await
    }

    pub async fn asset(&self, id: &str) -> Result<Option<Asset>, FleetError> {
        let id = id.to_string();
        self.request(|reply| FleetCommand::GetAsset { id, reply }).await
    }

    /// Replace the asset `id` with `asset` (full replace)
    pub async fn apply_edit(&self, id: &str, asset: Asset) -> Result<Asset, FleetError> {
        let id = id.to_string();
        self.request(|reply| FleetCommand::ApplyEdit { id, asset, reply })
            .await?
    }

    pub async fn notifications(&self) -> Result<NotificationSummary, FleetError> {
        self.request(|reply| FleetCommand::ListNotifications { reply }).await
    }

    pub async fn mark_all_read(&self) -> Result<NotificationSummary, FleetError> {
        self.request(|reply| FleetCommand::MarkAllRead { reply }).await
    }

    pub async fn clear_notifications(&self) -> Result<NotificationSummary, FleetError> {
        self.request(|reply| FleetCommand::ClearNotifications { reply }).await
    }

    pub async fn simulation(&self) -> Result<SimulationStatus, FleetError> {
        self.request(|reply| FleetCommand::GetSimulation { reply }).await
    }

    /// Start (`true`) or stop (`false`) the tick timer
    pub async fn set_running(&self, running: bool) -> Result<SimulationStatus, FleetError> {
        self.request(|reply| FleetCommand::SetRunning { running, reply }).await
    }

    pub async fn step(&self) -> Result<SimulationStatus, FleetError> {
        self.request(|reply| FleetCommand::Step { reply }).await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> FleetCommand,
    ) -> Result<T, FleetError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(make(reply_tx))
            .await
            .map_err(|_| FleetError::ServiceUnavailable)?;
        reply_rx.await.map_err(|_| FleetError::ServiceUnavailable)
    }
}

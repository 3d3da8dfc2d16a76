use crate::fleet::FleetEvent;
use crate::subscription::protocol::{
    AlertMessage, AssetUpdateMessage, ClientMessage, ErrorMessage, NotificationLogMessage,
    NotificationMessage, SimulationStateMessage,
};
use axum::extract::ws::{Message, WebSocket};
use std::collections::HashSet;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

/// Manages a single WebSocket connection with asset subscriptions
pub struct ConnectionManager {
    /// Asset IDs this connection is subscribed to (empty = all)
    subscriptions: HashSet<String>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            subscriptions: HashSet::new(),
        }
    }

    /// Handle WebSocket connection lifecycle
    pub async fn handle(
        mut self,
        mut socket: WebSocket,
        mut event_rx: broadcast::Receiver<FleetEvent>,
    ) {
        info!("WebSocket connection established");

        loop {
            tokio::select! {
                // Handle incoming client messages
                Some(msg) = socket.recv() => {
                    match msg {
                        Ok(Message::Text(text)) => {
                            if let Err(e) = self.handle_client_message(&text) {
                                warn!(error = %e, "Invalid client message");
                                let reply = ErrorMessage::new(e.to_string());
                                if let Err(e) = send_json(&mut socket, &reply).await {
                                    error!(error = %e, "Failed to send error message");
                                    break;
                                }
                            }
                        }
                        Ok(Message::Close(_)) => {
                            info!("WebSocket client disconnected");
                            break;
                        }
                        Ok(Message::Ping(data)) => {
                            if let Err(e) = socket.send(Message::Pong(data)).await {
                                error!(error = %e, "Failed to send pong");
                                break;
                            }
                        }
                        Ok(_) => {
                            // Ignore binary, pong messages
                        }
                        Err(e) => {
                            warn!(error = %e, "WebSocket error");
                            break;
                        }
                    }
                }

                // Forward fleet events from broadcast channel
                result = event_rx.recv() => {
                    match result {
                        Ok(event) => {
                            if let Err(e) = self.forward(&mut socket, event).await {
                                error!(error = %e, "Failed to send fleet event");
                                break;
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(skipped = skipped, "WebSocket lagged, skipped events");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            error!("Fleet event channel closed");
                            break;
                        }
                    }
                }

                else => {
                    break;
                }
            }
        }

        info!("WebSocket connection closed");
    }

    /// Handle client message (subscribe/unsubscribe)
    pub(crate) fn handle_client_message(&mut self, text: &str) -> anyhow::Result<()> {
        let msg: ClientMessage = serde_json::from_str(text)?;

        match msg {
            ClientMessage::Subscribe { asset_id } => {
                info!(asset_id = %asset_id, "Client subscribed to asset");
                self.subscriptions.insert(asset_id);
            }
            ClientMessage::Unsubscribe { asset_id } => {
                info!(asset_id = %asset_id, "Client unsubscribed from asset");
                self.subscriptions.remove(&asset_id);
            }
        }

        Ok(())
    }

    /// Encode `event` for this connection; `None` when nothing is relevant.
    ///
    /// Asset updates are narrowed to subscribed assets. Notifications,
    /// alerts and simulation state always go through.
    pub(crate) fn encode(&self, event: FleetEvent) -> anyhow::Result<Option<String>> {
        let json = match event {
            FleetEvent::AssetsUpdated { tick, assets } => {
                let assets: Vec<_> = assets
                    .into_iter()
                    .filter(|a| self.is_subscribed(&a.id))
                    .collect();
                if assets.is_empty() {
                    return Ok(None);
                }
                serde_json::to_string(&AssetUpdateMessage::new(tick, assets))?
            }
            FleetEvent::NotificationAdded(notification) => {
                serde_json::to_string(&NotificationMessage::from(notification))?
            }
            FleetEvent::Alert(alert) => serde_json::to_string(&AlertMessage::from(alert))?,
            FleetEvent::NotificationLogChanged { total, unread_count } => {
                serde_json::to_string(&NotificationLogMessage::new(total, unread_count))?
            }
            FleetEvent::SimulationStateChanged { running } => {
                serde_json::to_string(&SimulationStateMessage::new(running))?
            }
        };

        Ok(Some(json))
    }

    fn is_subscribed(&self, asset_id: &str) -> bool {
        self.subscriptions.is_empty() || self.subscriptions.contains(asset_id)
    }

    async fn forward(&self, socket: &mut WebSocket, event: FleetEvent) -> anyhow::Result<()> {
        if let Some(json) = self.encode(event)? {
            socket.send(Message::Text(json)).await?;
        }
        Ok(())
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize and send a single message
pub(crate) async fn send_json<T: serde::Serialize>(
    socket: &mut WebSocket,
    msg: &T,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(msg)?;
    socket.send(Message::Text(json)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::seed::initial_fleet;
    use crate::notification::{Alert, NewNotification, NotificationKind};
    use serde_json::Value;

    fn decode(json: Option<String>) -> Value {
        serde_json::from_str(&json.expect("message expected")).unwrap()
    }

    #[test]
    fn test_unsubscribed_connection_gets_all_assets() {
        let manager = ConnectionManager::new();
        let event = FleetEvent::AssetsUpdated {
            tick: 3,
            assets: initial_fleet(),
        };

        let msg = decode(manager.encode(event).unwrap());
        assert_eq!(msg["type"], "asset_update");
        assert_eq!(msg["tick"], 3);
        assert_eq!(msg["assets"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn test_subscription_narrows_asset_updates() {
        let mut manager = ConnectionManager::new();
        manager
            .handle_client_message(r#"{"type":"subscribe","asset_id":"SRC-104"}"#)
            .unwrap();

        let msg = decode(
            manager
                .encode(FleetEvent::AssetsUpdated {
                    tick: 1,
                    assets: initial_fleet(),
                })
                .unwrap(),
        );
        let assets = msg["assets"].as_array().unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0]["id"], "SRC-104");

        manager
            .handle_client_message(r#"{"type":"unsubscribe","asset_id":"SRC-104"}"#)
            .unwrap();
        assert!(manager.subscriptions.is_empty());
    }

    #[test]
    fn test_no_matching_assets_sends_nothing() {
        let mut manager = ConnectionManager::new();
        manager
            .handle_client_message(r#"{"type":"subscribe","asset_id":"SRC-UNKNOWN"}"#)
            .unwrap();

        let encoded = manager
            .encode(FleetEvent::AssetsUpdated {
                tick: 1,
                assets: initial_fleet(),
            })
            .unwrap();
        assert!(encoded.is_none());
    }

    #[test]
    fn test_notifications_and_alerts_ignore_subscriptions() {
        let mut manager = ConnectionManager::new();
        manager
            .handle_client_message(r#"{"type":"subscribe","asset_id":"SRC-104"}"#)
            .unwrap();

        let note = NewNotification::new(NotificationKind::Warning, "Low Fuel Warning", "low")
            .into_notification();
        let msg = decode(manager.encode(FleetEvent::NotificationAdded(note)).unwrap());
        assert_eq!(msg["type"], "notification");
        assert_eq!(msg["notification"]["type"], "warning");

        let alert = Alert::new(NotificationKind::Error, "broken");
        let msg = decode(manager.encode(FleetEvent::Alert(alert)).unwrap());
        assert_eq!(msg["type"], "alert");
        assert_eq!(msg["alert"]["message"], "broken");

        let msg = decode(
            manager
                .encode(FleetEvent::NotificationLogChanged {
                    total: 4,
                    unread_count: 0,
                })
                .unwrap(),
        );
        assert_eq!(msg["type"], "notification_log");
        assert_eq!(msg["unreadCount"], 0);

        let msg = decode(
            manager
                .encode(FleetEvent::SimulationStateChanged { running: false })
                .unwrap(),
        );
        assert_eq!(msg["type"], "simulation_state");
        assert_eq!(msg["running"], false);
    }

    #[test]
    fn test_invalid_client_message_rejected() {
        let mut manager = ConnectionManager::new();
        assert!(manager.handle_client_message("not json").is_err());
        assert!(manager
            .handle_client_message(r#"{"type":"teleport","asset_id":"SRC-104"}"#)
            .is_err());
    }
}

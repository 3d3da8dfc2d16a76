// Asset model, validation and seed fleet
pub mod asset;

// Pure simulation step and tick scheduler
pub mod simulation;

// Change detection and notification log
pub mod notification;

// Fleet state owner and command task
pub mod fleet;

// Service configuration
pub mod config;

// HTTP and WebSocket APIs
pub mod api;

// Subscription management
pub mod subscription;

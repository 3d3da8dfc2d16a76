use super::*;
use crate::asset::{Asset, AssetCategory, AssetDetails, AssetStatus, Coordinates};
use crate::simulation::TickObserver;
use serde_json::json;

fn asset(id: &str, status: AssetStatus, fuel_level: f64) -> Asset {
    Asset {
        id: id.to_string(),
        name: format!("Truck {}", id),
        category: AssetCategory::HeavyTransport,
        driver: "Isaac Banda".to_string(),
        cargo_type: "Imported Goods".to_string(),
        status,
        location: Coordinates::new(-15.9534, 28.8657),
        destination: Coordinates::new(-15.3875, 28.3228),
        fuel_level,
        speed: 68.0,
        details: AssetDetails::default(),
    }
}

fn draft(n: usize) -> NewNotification {
    NewNotification::new(NotificationKind::Info, format!("n{}", n), "message")
}

// ── detector ────────────────────────────────────────────────────────────────

#[test]
fn test_breakdown_transition_detected() {
    let previous = vec![asset("SRC-330", AssetStatus::Moving, 80.0)];
    let mut broken = asset("SRC-330", AssetStatus::Breakdown, 80.0);
    broken.speed = 0.0;

    let transitions = detect_transitions(&previous, &[broken], 15.0);

    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].asset_id(), "SRC-330");

    let note = transitions[0].notification();
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.title, "Asset Breakdown");
    assert_eq!(
        note.message,
        "Vehicle Truck SRC-330 (SRC-330) has broken down near -15.95, 28.87"
    );

    let alert = transitions[0].alert().unwrap();
    assert_eq!(alert.kind, NotificationKind::Error);
    assert_eq!(alert.message, note.message);
}

#[test]
fn test_already_broken_down_is_silent() {
    let previous = vec![asset("SRC-410", AssetStatus::Breakdown, 15.0)];
    let next = previous.clone();

    assert!(detect_transitions(&previous, &next, 15.0).is_empty());
}

#[test]
fn test_low_fuel_crossing_detected() {
    let previous = vec![asset("SRC-550", AssetStatus::Moving, 15.1)];
    let next = vec![asset("SRC-550", AssetStatus::Moving, 14.6)];

    let transitions = detect_transitions(&previous, &next, 15.0);

    assert_eq!(transitions.len(), 1);
    let note = transitions[0].notification();
    assert_eq!(note.kind, NotificationKind::Warning);
    assert_eq!(note.title, "Low Fuel Warning");
    assert_eq!(note.message, "Truck SRC-550 is running low on fuel (15%)");
    assert!(transitions[0].alert().is_none());
}

#[test]
fn test_low_fuel_threshold_is_inclusive() {
    let previous = vec![asset("SRC-1", AssetStatus::Moving, 15.05)];
    let next = vec![asset("SRC-1", AssetStatus::Moving, 15.0)];

    assert_eq!(detect_transitions(&previous, &next, 15.0).len(), 1);
}

#[test]
fn test_refuel_and_staying_low_are_silent() {
    let refuel = detect_transitions(
        &[asset("SRC-1", AssetStatus::Moving, 10.0)],
        &[asset("SRC-1", AssetStatus::Moving, 90.0)],
        15.0,
    );
    assert!(refuel.is_empty());

    let still_low = detect_transitions(
        &[asset("SRC-1", AssetStatus::Moving, 14.0)],
        &[asset("SRC-1", AssetStatus::Moving, 13.9)],
        15.0,
    );
    assert!(still_low.is_empty());
}

#[test]
fn test_other_changes_are_silent() {
    let previous = vec![
        asset("SRC-1", AssetStatus::Idle, 50.0),
        asset("SRC-2", AssetStatus::Moving, 50.0),
        asset("SRC-3", AssetStatus::Breakdown, 50.0),
    ];
    let mut next = vec![
        asset("SRC-1", AssetStatus::Moving, 50.0),
        asset("SRC-2", AssetStatus::Moving, 49.9),
        asset("SRC-3", AssetStatus::Idle, 50.0),
    ];
    next[1].location = Coordinates::new(-15.9, 28.8);
    next[1].speed = 10.0;

    assert!(detect_transitions(&previous, &next, 15.0).is_empty());
}

#[test]
fn test_breakdown_and_low_fuel_same_asset() {
    let previous = vec![asset("SRC-1", AssetStatus::Moving, 20.0)];
    let next = vec![asset("SRC-1", AssetStatus::Breakdown, 12.0)];

    let transitions = detect_transitions(&previous, &next, 15.0);

    assert_eq!(transitions.len(), 2);
    assert!(matches!(transitions[0], Transition::Breakdown { .. }));
    assert!(matches!(transitions[1], Transition::LowFuel { .. }));
}

#[test]
fn test_lookup_is_by_id_not_position() {
    let previous = vec![
        asset("SRC-A", AssetStatus::Moving, 50.0),
        asset("SRC-B", AssetStatus::Moving, 16.0),
    ];
    // Same assets, reversed order
    let next = vec![
        asset("SRC-B", AssetStatus::Moving, 14.0),
        asset("SRC-A", AssetStatus::Moving, 50.0),
    ];

    let transitions = detect_transitions(&previous, &next, 15.0);

    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].asset_id(), "SRC-B");
}

#[test]
fn test_new_assets_are_ignored() {
    let next = vec![asset("SRC-NEW", AssetStatus::Breakdown, 5.0)];
    assert!(detect_transitions(&[], &next, 15.0).is_empty());
}

// ── log ─────────────────────────────────────────────────────────────────────

#[test]
fn test_log_is_most_recent_first() {
    let mut log = NotificationLog::new(50);
    log.push(draft(1));
    log.push(draft(2));

    let entries = log.entries();
    assert_eq!(entries[0].title, "n2");
    assert_eq!(entries[1].title, "n1");
    assert!(entries.iter().all(|n| !n.read));
}

#[test]
fn test_log_evicts_oldest_at_capacity() {
    let mut log = NotificationLog::new(50);
    for n in 0..60 {
        log.push(draft(n));
    }

    assert_eq!(log.len(), log.capacity());
    let entries = log.entries();
    assert_eq!(entries.len(), 50);
    assert_eq!(entries[0].title, "n59");
    assert_eq!(entries[49].title, "n10");
}

#[test]
fn test_mark_all_read_and_clear() {
    let mut log = NotificationLog::new(50);
    for n in 0..3 {
        log.push(draft(n));
    }
    assert_eq!(log.unread_count(), 3);

    assert_eq!(log.mark_all_read(), 3);
    assert_eq!(log.unread_count(), 0);
    assert!(log.entries().iter().all(|n| n.read));

    log.push(draft(3));
    assert_eq!(log.unread_count(), 1);
    assert_eq!(log.mark_all_read(), 1);

    assert_eq!(log.clear(), 4);
    assert!(log.is_empty());
    assert_eq!(log.unread_count(), 0);
}

#[test]
fn test_default_log_uses_configured_capacity() {
    let log = NotificationLog::default();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert_eq!(log.capacity(), NotificationConfig::default().capacity);
}

#[test]
fn test_notification_ids_unique() {
    let mut log = NotificationLog::new(10);
    let a = log.push(draft(1));
    let b = log.push(draft(2));
    assert_ne!(a.id, b.id);
}

#[test]
fn test_notification_wire_format() {
    let note = draft(1).into_notification();
    let value = serde_json::to_value(&note).unwrap();

    assert_eq!(value["type"], json!("info"));
    assert_eq!(value["read"], json!(false));
    assert!(value["timestamp"].is_string());
}

// ── notifier ────────────────────────────────────────────────────────────────

#[test]
fn test_notifier_logs_and_queues_alerts() {
    let mut notifier = Notifier::new(&NotificationConfig::default());

    let previous = vec![
        asset("SRC-1", AssetStatus::Moving, 50.0),
        asset("SRC-2", AssetStatus::Moving, 15.5),
    ];
    let next = vec![
        asset("SRC-1", AssetStatus::Breakdown, 50.0),
        asset("SRC-2", AssetStatus::Moving, 15.3),
    ];
    notifier.on_tick(&previous, &next);
    // Breakdown only; 15.3 is still above the threshold
    assert_eq!(notifier.log().len(), 1);

    let later = vec![
        asset("SRC-1", AssetStatus::Breakdown, 50.0),
        asset("SRC-2", AssetStatus::Moving, 14.9),
    ];
    notifier.on_tick(&next, &later);

    assert_eq!(notifier.log().len(), 2);
    assert_eq!(notifier.log().unread_count(), 2);

    let (created, alerts) = notifier.drain();
    assert_eq!(created.len(), 2);
    assert_eq!(created[0].kind, NotificationKind::Error);
    assert_eq!(created[1].kind, NotificationKind::Warning);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].message.contains("SRC-1"));

    let (created, alerts) = notifier.drain();
    assert!(created.is_empty());
    assert!(alerts.is_empty());
}

#[test]
fn test_notifier_respects_configured_threshold_and_capacity() {
    let config = NotificationConfig {
        capacity: 2,
        low_fuel_threshold: 50.0,
    };
    let mut notifier = Notifier::new(&config);

    for id in ["SRC-1", "SRC-2", "SRC-3"] {
        notifier.on_tick(
            &[asset(id, AssetStatus::Moving, 51.0)],
            &[asset(id, AssetStatus::Moving, 49.0)],
        );
    }

    assert_eq!(notifier.log().capacity(), 2);
    let entries = notifier.log().entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].message.starts_with("Truck SRC-3"));
    assert!(entries[1].message.starts_with("Truck SRC-2"));
}

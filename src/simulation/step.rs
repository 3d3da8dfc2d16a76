use crate::asset::{Asset, AssetStatus, Coordinates};
use crate::simulation::{RandomSource, SimulationConfig};
use tracing::info;

/// Compute the next asset collection from the current one.
///
/// Non-moving assets pass through untouched. Each moving asset draws two
/// samples from `rng`, fuel jitter first and breakdown roll second.
pub fn step(assets: &[Asset], rng: &mut dyn RandomSource, config: &SimulationConfig) -> Vec<Asset> {
    assets
        .iter()
        .map(|asset| step_asset(asset, rng, config))
        .collect()
}

/// Advance a single asset by one tick
pub fn step_asset(asset: &Asset, rng: &mut dyn RandomSource, config: &SimulationConfig) -> Asset {
    match asset.status {
        AssetStatus::Moving => {}
        AssetStatus::Idle
        | AssetStatus::Stopped
        | AssetStatus::Breakdown
        | AssetStatus::Maintenance => return asset.clone(),
    }

    // Move a fixed fraction of the remaining distance
    let lat_diff = asset.destination.lat - asset.location.lat;
    let lng_diff = asset.destination.lng - asset.location.lng;
    let location = Coordinates::new(
        asset.location.lat + lat_diff * config.move_fraction,
        asset.location.lng + lng_diff * config.move_fraction,
    );

    let burn = rng.next_unit() * config.max_fuel_burn;
    let fuel_level = (asset.fuel_level - burn).clamp(0.0, 100.0);

    // A breakdown discards this tick's movement and fuel burn
    let roll = rng.next_unit();
    if roll < config.breakdown_probability {
        return Asset {
            status: AssetStatus::Breakdown,
            speed: 0.0,
            ..asset.clone()
        };
    }

    let mut next = Asset {
        location,
        fuel_level,
        ..asset.clone()
    };

    if config.arrival_epsilon > 0.0
        && next.location.distance_to(&next.destination) < config.arrival_epsilon
    {
        next.location = next.destination;
        next.status = AssetStatus::Idle;
        next.speed = 0.0;
        info!(asset_id = %next.id, "Asset arrived at destination");
    }

    next
}

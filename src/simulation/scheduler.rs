use crate::asset::Asset;
use crate::simulation::{step, RandomSource, SimulationConfig};
use tracing::debug;

/// Hook invoked synchronously with the collection before and after every
/// state change (simulation tick or operator edit).
pub trait TickObserver {
    fn on_tick(&mut self, previous: &[Asset], next: &[Asset]);
}

impl<F> TickObserver for F
where
    F: FnMut(&[Asset], &[Asset]),
{
    fn on_tick(&mut self, previous: &[Asset], next: &[Asset]) {
        self(previous, next)
    }
}

/// Owns the current asset collection and drives it forward one tick at a time
pub struct Scheduler {
    assets: Vec<Asset>,
    rng: Box<dyn RandomSource + Send>,
    config: SimulationConfig,
    tick_count: u64,
}

impl Scheduler {
    pub fn new(
        assets: Vec<Asset>,
        rng: Box<dyn RandomSource + Send>,
        config: SimulationConfig,
    ) -> Self {
        Self {
            assets,
            rng,
            config,
            tick_count: 0,
        }
    }

    /// Current collection (last installed snapshot)
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run one simulation step, report it to `observer`, then install the
    /// new collection in a single assignment.
    pub fn advance(&mut self, observer: &mut dyn TickObserver) -> &[Asset] {
        let next = step(&self.assets, self.rng.as_mut(), &self.config);
        observer.on_tick(&self.assets, &next);
        self.assets = next;
        self.tick_count += 1;

        debug!(tick = self.tick_count, assets = self.assets.len(), "Simulation tick");

        &self.assets
    }

    /// Replace the asset with the same id, reporting the change to
    /// `observer` like a tick. Returns the replaced value, or `None` when no
    /// asset has that id (nothing changes).
    pub fn replace(&mut self, asset: Asset, observer: &mut dyn TickObserver) -> Option<Asset> {
        let index = self.assets.iter().position(|a| a.id == asset.id)?;

        let mut next = self.assets.clone();
        let previous = std::mem::replace(&mut next[index], asset);

        observer.on_tick(&self.assets, &next);
        self.assets = next;

        Some(previous)
    }
}

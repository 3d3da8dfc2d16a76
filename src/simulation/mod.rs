// Position simulation: tick function, randomness seam and scheduler

pub mod config;
mod random;
mod scheduler;
mod step;

pub use config::SimulationConfig;
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use scheduler::{Scheduler, TickObserver};
pub use step::{step, step_asset};

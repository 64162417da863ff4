pub mod chain;
pub mod config;
pub mod simulation;

mod mcmc;
mod results;
mod stats;

pub use chain::SpinChain;
pub use config::SimConfig;
pub use results::{theoretical_pair_correlation, ExperimentResult, TrialResult};
pub use simulation::{run_experiment, run_trial};

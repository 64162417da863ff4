use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;
use validator::Validate;

use crate::config::SimConfig;
use crate::mcmc;
use crate::results::{ExperimentResult, TrialResult};
use crate::stats::ObservableAccum;

/// Produce one trial-level mean pair.
///
/// Runs the Metropolis sampler `samples_per_trial` times, each run an
/// independent restart from the deterministic start configuration rather
/// than a continuation of the previous terminal state. The restarts give Nm
/// roughly independent draws from the stationary distribution instead of Nm
/// correlated resampled states.
///
/// `on_sample` is called once per sampler run (useful for progress bars).
pub fn run_trial(
    config: &SimConfig,
    rng: &mut Xoshiro256StarStar,
    on_sample: &(dyn Fn() + Sync),
) -> TrialResult {
    let mut accum = ObservableAccum::new();
    for _ in 0..config.samples_per_trial {
        on_sample();
        let chain = mcmc::sample_chain(config, rng);
        accum.update(chain.magnetization(), chain.pair_correlation());
    }
    let (mag_mean, corr_mean) = accum.average();
    TrialResult {
        mag_mean,
        corr_mean,
    }
}

/// Run `n_trials` independent trials concurrently and reduce their means.
///
/// Each trial owns its chain instances, accumulator, and PRNG stream
/// (`base_seed + trial_id`, as independent streams); the only shared state
/// is the read-only config. The parallel `collect` is the join-all barrier:
/// no trial result is read before every worker has finished. There is no
/// cancellation or timeout, so a stalled worker stalls the whole experiment.
///
/// The reduction is the average of the trial-level means, tagged with the
/// run temperature.
pub fn run_experiment(
    config: &SimConfig,
    base_seed: u64,
    on_sample: &(dyn Fn() + Sync),
) -> Result<ExperimentResult, String> {
    config.validate().map_err(|e| format!("{e}"))?;

    if config.n_trials == 1 {
        // No rayon overhead for a singleton experiment.
        let mut rng = Xoshiro256StarStar::seed_from_u64(base_seed);
        let trial = run_trial(config, &mut rng, on_sample);
        return Ok(ExperimentResult::aggregate(config.temperature, &[trial]));
    }

    let trials: Vec<TrialResult> = (0..config.n_trials)
        .into_par_iter()
        .map(|trial_id| {
            let mut rng = Xoshiro256StarStar::seed_from_u64(base_seed + trial_id as u64);
            run_trial(config, &mut rng, on_sample)
        })
        .collect();

    Ok(ExperimentResult::aggregate(config.temperature, &trials))
}

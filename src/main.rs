use std::time::Instant;

use chain_sim::{run_experiment, SimConfig};
use indicatif::{ProgressBar, ProgressStyle};

const N_TRIALS: usize = 1000;
const N_SPINS: usize = 100;
const FIELD: f64 = 0.0;
const COUPLING: f64 = -1.0;
const TEMPERATURE: f64 = 1.9;
const SAMPLES_PER_TRIAL: usize = 3;
const FLIPS_PER_SPIN: usize = 470;
const SEED: u64 = 42;

fn main() {
    let config = SimConfig {
        n_spins: N_SPINS,
        field: FIELD,
        coupling: COUPLING,
        temperature: TEMPERATURE,
        samples_per_trial: SAMPLES_PER_TRIAL,
        flips_per_spin: FLIPS_PER_SPIN,
        n_trials: N_TRIALS,
    };

    println!(
        "Spins: {}  |  B: {}  |  C: {}  |  T: {}  |  Trials: {}  |  Samples/trial: {}  |  Flips/spin: {}",
        N_SPINS, FIELD, COUPLING, TEMPERATURE, N_TRIALS, SAMPLES_PER_TRIAL, FLIPS_PER_SPIN
    );
    println!("Calculating <m> and <cp>...");

    let pb = ProgressBar::new((N_TRIALS * SAMPLES_PER_TRIAL) as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )
        .unwrap()
        .progress_chars("=> "),
    );
    pb.set_message("samples");

    let t0 = Instant::now();
    let result = run_experiment(&config, SEED, &|| pb.inc(1)).unwrap();
    pb.finish();
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "{}     {}     {}",
        result.temperature, result.mag_mean, result.corr_mean
    );
    println!("Total: {:.3} s", elapsed);
}

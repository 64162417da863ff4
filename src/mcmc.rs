use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::chain::SpinChain;
use crate::config::SimConfig;

/// Metropolis acceptance decision for a proposed energy change.
///
/// Downhill moves are always taken, uphill moves with probability
/// exp(−ΔE/T) against a single uniform draw. A zero-cost move is rejected:
/// neither branch fires and the configuration stays put.
fn accept(delta_e: f64, temperature: f64, rng: &mut Xoshiro256StarStar) -> bool {
    if delta_e < 0.0 {
        true
    } else if delta_e > 0.0 {
        rng.gen::<f64>() < (-delta_e / temperature).exp()
    } else {
        false
    }
}

/// Run one Metropolis chain to its terminal configuration.
///
/// Starts from the deterministic configuration for the config's coupling and
/// makes `n_spins * flips_per_spin` single-spin proposals at uniformly random
/// sites. There is no convergence check; the proposal count is the sole
/// termination criterion, and `flips_per_spin = 0` degenerates to a no-op
/// that returns the start configuration.
pub fn sample_chain(config: &SimConfig, rng: &mut Xoshiro256StarStar) -> SpinChain {
    let mut chain = SpinChain::new(config.n_spins, config.coupling);
    let n_proposals = config.n_spins * config.flips_per_spin;

    for _ in 0..n_proposals {
        let i = rng.gen_range(0..config.n_spins);
        let delta_e = chain.flip_delta(i, config.field, config.coupling);
        if accept(delta_e, config.temperature, rng) {
            chain.flip(i);
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(seed)
    }

    #[test]
    fn test_downhill_always_accepted() {
        let mut rng = rng(1);
        for _ in 0..1000 {
            assert!(accept(-0.5, 1.0, &mut rng));
        }
    }

    #[test]
    fn test_zero_delta_never_accepted() {
        let mut rng = rng(2);
        for _ in 0..1000 {
            assert!(!accept(0.0, 1.0, &mut rng));
        }
    }

    #[test]
    fn test_uphill_frozen_at_low_temperature() {
        // exp(−1/1e-6) underflows to exactly 0, so no draw can pass.
        let mut rng = rng(3);
        for _ in 0..1000 {
            assert!(!accept(1.0, 1e-6, &mut rng));
        }
    }

    #[test]
    fn test_uphill_free_at_infinite_temperature() {
        // exp(−ΔE/∞) = 1 and uniform draws live in [0, 1).
        let mut rng = rng(4);
        for _ in 0..1000 {
            assert!(accept(1.0, f64::INFINITY, &mut rng));
        }
    }

    #[test]
    fn test_zero_coupling_zero_field_never_moves() {
        // Every proposal has ΔE = 0, so the chain must stay in its start
        // configuration no matter how many proposals are made.
        let config = SimConfig {
            n_spins: 12,
            field: 0.0,
            coupling: 0.0,
            flips_per_spin: 50,
            ..SimConfig::default()
        };
        let chain = sample_chain(&config, &mut rng(5));
        assert_eq!(chain.spins(), SpinChain::new(12, 0.0).spins());
    }

    #[test]
    fn test_ground_state_stable_at_low_temperature() {
        // From all-up, any flip costs ΔE = 4C; at T = 1e-3 the acceptance
        // probability underflows to 0 and the ground state is absorbing.
        let config = SimConfig {
            n_spins: 16,
            field: 0.0,
            coupling: 1.0,
            temperature: 1e-3,
            flips_per_spin: 100,
            ..SimConfig::default()
        };
        let chain = sample_chain(&config, &mut rng(6));
        assert!(chain.spins().iter().all(|&s| s == 1));
    }

    #[test]
    fn test_zero_proposals_is_noop() {
        let config = SimConfig {
            n_spins: 9,
            coupling: -1.0,
            flips_per_spin: 0,
            ..SimConfig::default()
        };
        let chain = sample_chain(&config, &mut rng(7));
        assert_eq!(chain.spins(), SpinChain::new(9, -1.0).spins());
    }
}

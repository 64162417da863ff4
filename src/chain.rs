/// One-dimensional spin ring with periodic boundary.
///
/// Spins are stored as `i8` values that are always +1 or −1. Site `i`
/// neighbors `(i + 1) % n` and `(i + n - 1) % n`; the bond between the last
/// and first site closes the ring. The length is fixed for the lifetime of
/// the chain and the only mutation is a single-spin flip.
pub struct SpinChain {
    spins: Vec<i8>,
}

impl SpinChain {
    /// Deterministic start configuration for a coupling `c`.
    ///
    /// `c >= 0` favors alignment, so every spin starts at +1. `c < 0` favors
    /// anti-alignment, so spins alternate +1, −1, … starting at +1.
    pub fn new(n: usize, coupling: f64) -> Self {
        let spins = if coupling >= 0.0 {
            vec![1i8; n]
        } else {
            (0..n).map(|i| if i % 2 == 0 { 1 } else { -1 }).collect()
        };
        Self { spins }
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Total energy E = −Σᵢ s[i]·(B + C·s[i+1]), summed over all n bonds
    /// including the wraparound bond.
    pub fn energy(&self, field: f64, coupling: f64) -> f64 {
        let n = self.spins.len();
        let mut total = 0.0;
        for i in 0..n {
            let s = self.spins[i] as f64;
            let next = self.spins[(i + 1) % n] as f64;
            total += s * (field + coupling * next);
        }
        -total
    }

    /// Mean spin value Σ s[i] / n.
    pub fn magnetization(&self) -> f64 {
        let sum: i64 = self.spins.iter().map(|&s| s as i64).sum();
        sum as f64 / self.spins.len() as f64
    }

    /// Mean nearest-neighbor product Σ s[i]·s[i+1] / n, wraparound included.
    pub fn pair_correlation(&self) -> f64 {
        let n = self.spins.len();
        let mut sum = 0i64;
        for i in 0..n {
            sum += (self.spins[i] as i64) * (self.spins[(i + 1) % n] as i64);
        }
        sum as f64 / n as f64
    }

    /// Energy change of flipping spin `i`, from the two bonds through it.
    ///
    /// Equals `energy` after the flip minus `energy` before it, without
    /// touching the other n − 2 bonds. For n == 1 the single wraparound bond
    /// pairs the spin with itself, so the coupling term cancels under a flip
    /// and only the field term remains.
    #[inline]
    pub fn flip_delta(&self, i: usize, field: f64, coupling: f64) -> f64 {
        let n = self.spins.len();
        let s = self.spins[i] as f64;
        if n == 1 {
            return 2.0 * s * field;
        }
        let left = self.spins[(i + n - 1) % n] as f64;
        let right = self.spins[(i + 1) % n] as f64;
        2.0 * s * (field + coupling * (left + right))
    }

    /// Negate spin `i`.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        self.spins[i] = -self.spins[i];
    }
}

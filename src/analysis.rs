use crate::models::{AnalysisResult, PowersAndRoots};
use crate::{bases, digests, number_theory, reinterpret, trig, words};
use tracing::{debug, info};

/// Runs the full battery of derived representations for one integer.
///
/// Stateless apart from configuration; every field of the result is a
/// pure function of the input, so repeated calls with the same value
/// yield identical records.
pub struct Analyzer {
    preceding_prime_count: usize,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            preceding_prime_count: number_theory::PRECEDING_PRIME_COUNT,
        }
    }

    pub fn with_preceding_prime_count(mut self, count: usize) -> Self {
        self.preceding_prime_count = count;
        self
    }

    pub fn analyze(&self, n: i128) -> AnalysisResult {
        info!("Analyzing {}", n);

        let bases = bases::convert(n);

        let mut number_theory = number_theory::analyze(n);
        if self.preceding_prime_count != number_theory::PRECEDING_PRIME_COUNT {
            number_theory.preceding_primes =
                number_theory::preceding_primes(n, self.preceding_prime_count);
        }
        debug!(
            "{} factors, prime: {}",
            number_theory.factors.len(),
            number_theory.is_prime
        );

        let reinterpretations = reinterpret::reinterpret(n, &bases.hexadecimal);

        AnalysisResult {
            input: n,
            english_words: words::to_english(n),
            number_theory,
            powers: compute_powers(n),
            trig: trig::evaluate(n),
            digests: digests::compute(n),
            reinterpretations,
            bases,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_powers(n: i128) -> PowersAndRoots {
    let v = n as f64;
    PowersAndRoots {
        square: n.checked_mul(n),
        cube: n.checked_mul(n).and_then(|sq| sq.checked_mul(n)),
        square_root: if n >= 0 { v.sqrt() } else { f64::NAN },
        cube_root: v.cbrt(),
        log10: (n > 0).then(|| v.log10()),
        natural_log: (n > 0).then(|| v.ln()),
        half: v / 2.0,
    }
}

//! Common data types for PrimeDigit

use serde::{Deserialize, Serialize};

/// Result of a digit-transition analysis over an ordered prime sequence.
///
/// For a fixed source digit `d`, `counts[k]` is the number of consecutive
/// prime pairs `(p, q)` with `p % 10 == d` and `q % 10 == k`;
/// `probabilities[k]` is `counts[k] / total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionReport {
    /// Last digit whose successor distribution was measured
    pub source_digit: u8,

    /// Inclusive enumeration bound. `None` when the prime sequence was
    /// read from a file rather than enumerated.
    pub max_n: Option<u64>,

    /// Number of primes in the analyzed sequence
    pub n_primes: usize,

    /// Per-digit transition counts (index = last digit of the successor)
    pub counts: Vec<u64>,

    /// Number of primes ending in `source_digit` that have a successor
    /// in the sequence; the normalization denominator.
    pub total: u64,

    /// Per-digit transition probabilities; sums to 1.0 when `total > 0`
    pub probabilities: Vec<f64>,
}

impl TransitionReport {
    /// Create a new transition report
    pub fn new(
        source_digit: u8,
        max_n: Option<u64>,
        n_primes: usize,
        counts: [u64; 10],
        probabilities: [f64; 10],
    ) -> Self {
        let total = counts.iter().sum();
        Self {
            source_digit,
            max_n,
            n_primes,
            counts: counts.to_vec(),
            total,
            probabilities: probabilities.to_vec(),
        }
    }

    /// Probability that the successor ends in `digit`. `None` if out of range.
    pub fn probability(&self, digit: u8) -> Option<f64> {
        self.probabilities.get(digit as usize).copied()
    }
}

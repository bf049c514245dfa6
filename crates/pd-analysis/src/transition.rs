//! Last-digit transition statistics over an ordered prime sequence.

use pd_core::{Error, Result, TransitionReport};

/// Last decimal digit of `n`.
#[inline]
pub fn last_digit(n: u64) -> u8 {
    (n % 10) as u8
}

/// Per-digit counts of the successor's last digit, over all consecutive
/// pairs in `primes` whose first element ends in `source_digit`.
///
/// Only adjacent pairs in the sequence are considered: "next prime"
/// means the immediate successor in the full ordered sequence. The
/// final element has no successor and is never the first member of a
/// pair, even when its last digit matches `source_digit`.
pub fn transition_counts(primes: &[u64], source_digit: u8) -> Result<[u64; 10]> {
    if source_digit > 9 {
        return Err(Error::Validation(format!(
            "source digit must be in 0..=9, got {}",
            source_digit
        )));
    }
    let mut counts = [0u64; 10];
    for pair in primes.windows(2) {
        if last_digit(pair[0]) == source_digit {
            counts[last_digit(pair[1]) as usize] += 1;
        }
    }
    Ok(counts)
}

/// Normalize transition counts into a probability distribution.
///
/// The denominator is the tally total: the number of primes ending in
/// the source digit that have a successor. Errors when the total is
/// zero (no prime in the sequence transitions out of the source digit)
/// rather than returning a silent all-zero distribution.
pub fn probabilities(counts: &[u64; 10]) -> Result<[f64; 10]> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Err(Error::Computation(
            "division by zero: no transitions out of the source digit".to_string(),
        ));
    }
    let mut probs = [0.0f64; 10];
    for (p, &c) in probs.iter_mut().zip(counts.iter()) {
        *p = c as f64 / total as f64;
    }
    Ok(probs)
}

/// Build the full transition report for `primes` and `source_digit`.
///
/// `max_n` is the enumeration bound when the sequence was computed, or
/// `None` when it was read from a file.
pub fn transition_report(
    primes: &[u64],
    source_digit: u8,
    max_n: Option<u64>,
) -> Result<TransitionReport> {
    let counts = transition_counts(primes, source_digit)?;
    let probs = probabilities(&counts)?;
    Ok(TransitionReport::new(source_digit, max_n, primes.len(), counts, probs))
}

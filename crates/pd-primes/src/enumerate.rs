//! Prime enumeration over an inclusive bound.

use rayon::prelude::*;

use crate::trial::is_prime;

/// Candidates per chunk in the parallel path. Large enough to amortize
/// rayon scheduling, small enough to balance the uneven per-candidate
/// cost (trial division gets slower as n grows).
const PAR_CHUNK: u64 = 1 << 16;

/// All primes in `[0, max_n]`, ascending.
///
/// When `progress` is set, logs the current candidate and the number of
/// primes found so far every `max_n / 100` candidates (at least every
/// candidate, so small bounds cannot produce a zero step).
pub fn enumerate(max_n: u64, progress: bool) -> Vec<u64> {
    let step = (max_n / 100).max(1);
    let mut primes = Vec::new();
    for n in 0..=max_n {
        if progress && n % step == 0 {
            tracing::info!(n, primes = primes.len(), "enumerating primes");
        }
        if is_prime(n) {
            primes.push(n);
        }
    }
    primes
}

/// All primes in `[0, max_n]`, ascending, tested in parallel.
///
/// The range is split into disjoint contiguous chunks; candidates are
/// tested independently (primality needs no shared state) and per-chunk
/// results are concatenated in chunk order, so the output is identical
/// to [`enumerate`]. Runs on the current rayon pool.
pub fn enumerate_parallel(max_n: u64) -> Vec<u64> {
    let chunks: Vec<u64> = (0..=max_n / PAR_CHUNK).map(|i| i * PAR_CHUNK).collect();
    let per_chunk: Vec<Vec<u64>> = chunks
        .par_iter()
        .map(|&start| {
            let end = (start + PAR_CHUNK - 1).min(max_n);
            (start..=end).filter(|&n| is_prime(n)).collect()
        })
        .collect();
    let mut primes = Vec::with_capacity(per_chunk.iter().map(Vec::len).sum());
    for chunk in per_chunk {
        primes.extend(chunk);
    }
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_up_to_30() {
        assert_eq!(enumerate(30, false), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(enumerate(0, false).is_empty());
        assert!(enumerate(1, false).is_empty());
        assert_eq!(enumerate(2, false), vec![2]);
    }

    #[test]
    fn test_small_bound_with_progress_does_not_panic() {
        // step = max_n / 100 clamps to 1 below 100
        assert_eq!(enumerate(10, true), vec![2, 3, 5, 7]);
        assert!(enumerate(0, true).is_empty());
    }

    #[test]
    fn test_strictly_increasing_no_duplicates() {
        let primes = enumerate(1000, false);
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let bound = 5 * PAR_CHUNK / 2; // spans multiple chunks, last one partial
        assert_eq!(enumerate_parallel(bound), enumerate(bound, false));
        assert_eq!(enumerate_parallel(30), enumerate(30, false));
        assert!(enumerate_parallel(1).is_empty());
    }
}

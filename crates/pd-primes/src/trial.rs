//! Trial-division primality test.

/// Whether `n` is prime, by trial division.
///
/// Checks every `d` in `[2, isqrt(n)]` in ascending order and
/// short-circuits on the first divisor. Deliberately unoptimized
/// (no wheel, no even special case, no memoization): `O(sqrt(n))`
/// per candidate, which is acceptable for the bounds this tool targets.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let limit = n.isqrt();
    for d in 2..=limit {
        if n % d == 0 {
            return false;
        }
    }
    true
}

//! Digit-transition analysis for PrimeDigit.
//!
//! Given the ordered sequence of primes below a bound, measures the
//! empirical conditional distribution of the last decimal digit of the
//! next prime given the last digit of the current one.

pub mod transition;

pub use transition::{last_digit, probabilities, transition_counts, transition_report};

//! Number-theoretic building blocks for PrimeDigit:
//! - trial-division primality test
//! - prime enumeration (sequential with progress reporting, or chunked
//!   parallel via rayon)

pub mod enumerate;
pub mod trial;

pub use enumerate::{enumerate, enumerate_parallel};
pub use trial::is_prime;

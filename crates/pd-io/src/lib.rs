//! File I/O helpers for PrimeDigit: line-oriented primes files, JSON
//! load/dump with a configurable escape style, and scoped temporary
//! text files.

pub mod jsonio;
pub mod primes_file;
pub mod texttemp;

pub use jsonio::{dump_json, load_json, JsonStyle};
pub use primes_file::{read_primes, write_primes};
pub use texttemp::{TextTempFile, TextTempFileBuilder};

//! Line-oriented primes files: one integer per line, file order preserved.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use pd_core::{Error, Result};

/// Read a primes file: one integer per line, order preserved.
///
/// Blank lines are skipped (trailing newlines are the norm); any other
/// non-integer line is a parse error carrying its 1-based line number.
pub fn read_primes(path: &Path) -> Result<Vec<u64>> {
    let reader = BufReader::new(File::open(path)?);
    let mut primes = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let value: u64 = text.parse().map_err(|_| Error::Parse {
            line: idx + 1,
            msg: format!("expected an integer, got '{}'", text),
        })?;
        primes.push(value);
    }
    Ok(primes)
}

/// Write a primes file: one integer per line, trailing newline.
pub fn write_primes(path: &Path, primes: &[u64]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for p in primes {
        writeln!(writer, "{}", p)?;
    }
    writer.flush()?;
    Ok(())
}

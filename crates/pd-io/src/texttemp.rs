//! Scoped temporary text files.
//!
//! [`TextTempFile`] owns a named temporary file, optionally
//! pre-populated with text, and removes it when the value is dropped
//! unless `keep` was requested. It deliberately exposes a small fixed
//! surface (path, write, flush, read-back) instead of forwarding the
//! whole file API.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use pd_core::{Error, Result};

/// Builder for [`TextTempFile`].
#[derive(Debug, Clone)]
pub struct TextTempFileBuilder {
    prefix: String,
    suffix: String,
    dir: Option<PathBuf>,
    keep: bool,
}

impl Default for TextTempFileBuilder {
    fn default() -> Self {
        Self { prefix: "tmp".to_string(), suffix: String::new(), dir: None, keep: false }
    }
}

impl TextTempFileBuilder {
    /// File name prefix (default `tmp`).
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// File name suffix, e.g. `.json` (default empty).
    pub fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    /// Directory to create the file in (default: the system temp dir).
    pub fn dir(mut self, dir: &Path) -> Self {
        self.dir = Some(dir.to_path_buf());
        self
    }

    /// Keep the file on drop instead of removing it (default false).
    pub fn keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    /// Create the file, writing and flushing `init_text` when given.
    pub fn create(self, init_text: Option<&str>) -> Result<TextTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(&self.prefix).suffix(&self.suffix);
        let named = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        let (file, path, temp) = if self.keep {
            let (file, path) = named.keep().map_err(|e| Error::Io(e.error))?;
            (file, path, None)
        } else {
            let (file, temp_path) = named.into_parts();
            (file, temp_path.to_path_buf(), Some(temp_path))
        };
        let mut out = TextTempFile { file, path, _temp: temp };
        if let Some(text) = init_text {
            out.write_str(text)?;
            out.flush()?;
        }
        Ok(out)
    }
}

/// A temporary text file removed on drop (unless built with `keep`).
#[derive(Debug)]
pub struct TextTempFile {
    file: File,
    path: PathBuf,
    // Dropping the TempPath removes the file; None when kept.
    _temp: Option<TempPath>,
}

impl TextTempFile {
    /// Start building a temp file.
    pub fn builder() -> TextTempFileBuilder {
        TextTempFileBuilder::default()
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append text at the current write position.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.file.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Flush buffered writes to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    /// Read the file's full current content as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

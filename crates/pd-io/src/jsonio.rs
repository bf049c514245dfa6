//! JSON file load/dump helpers.
//!
//! A JSON document can carry non-ASCII text either as raw UTF-8 bytes
//! or as `\uXXXX` escapes; both decode to the same value. Loading
//! accepts either form. Dumping picks the form via [`JsonStyle`], and
//! the round trip preserves every code point regardless of the style.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::Formatter;

use pd_core::Result;

/// Output encoding style for [`dump_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Raw UTF-8, pretty-printed.
    Utf8,
    /// Pure ASCII: every non-ASCII character written as `\uXXXX`
    /// (surrogate pairs above the BMP). Compact output.
    EscapeAscii,
}

/// Load a JSON file into any deserializable value.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Dump a serializable value to a JSON file in the given style.
pub fn dump_json<T: Serialize>(value: &T, path: &Path, style: JsonStyle) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match style {
        JsonStyle::Utf8 => serde_json::to_writer_pretty(&mut writer, value)?,
        JsonStyle::EscapeAscii => {
            let mut ser = serde_json::Serializer::with_formatter(&mut writer, AsciiFormatter);
            value.serialize(&mut ser)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Formatter that escapes every non-ASCII character as `\uXXXX`.
///
/// Control characters, quotes and backslashes go through the default
/// escape path; only the string fragments in between (where serde_json
/// passes non-ASCII through verbatim) are rewritten here.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

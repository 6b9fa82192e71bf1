//! ISO-8859-1 file reading.
//!
//! Legacy payment files are encoded in a single-byte Western character set.
//! Latin-1 maps every byte to the Unicode code point of the same value, so
//! decoding is a direct byte-to-char widening. Decoding as UTF-8 instead would
//! reject (or worse, shift) the accented letters allowed in reference fields.

use std::fs;
use std::io;
use std::path::Path;

/// Reads a file as ISO-8859-1 and splits it into lines.
///
/// Accepts both `\n` and `\r\n` line separators. A trailing newline does not
/// produce an empty final line.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text: String = bytes.iter().map(|&b| b as char).collect();
    Ok(text.lines().map(str::to_owned).collect())
}

//! TOC-file rendering of CD-TEXT items
//!
//! ```text
//! TITLE "My Disc"
//! GENRE { 1,  5}
//! SIZE_INFO { 0,  1,  2, ...
//!                12, 13, ...}
//! ```

use core::fmt::{self, Write};

use crate::item::{CdTextItem, Encoding};

/// Entries per line of a binary byte list
pub const BYTES_PER_LINE: usize = 12;

/// Separator that starts a continuation line of a binary byte list
const LINE_BREAK: &str = ",\n               ";

/// Write `bytes` as a double-quoted string literal
///
/// Quotes become `\"`, bytes outside printable ASCII become `\NNN` octal
/// escapes, everything else is written as-is.
pub fn write_escaped_text<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    out.write_char('"')?;
    for &b in bytes {
        match b {
            b'"' => out.write_str("\\\"")?,
            0x20..=0x7E => out.write_char(b as char)?,
            _ => write!(out, "\\{:03o}", b)?,
        }
    }
    out.write_char('"')
}

/// Write `bytes` as a brace-delimited list of width-2 decimal values
pub fn write_byte_list<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    out.write_char('{')?;
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            if i % BYTES_PER_LINE == 0 {
                out.write_str(LINE_BREAK)?;
            } else {
                out.write_str(", ")?;
            }
        }
        write!(out, "{:2}", b)?;
    }
    out.write_char('}')
}

impl fmt::Display for CdTextItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())?;
        f.write_char(' ')?;
        match self.encoding() {
            Encoding::Text => write_escaped_text(f, self.text_bytes().unwrap_or_default()),
            Encoding::Binary => write_byte_list(f, self.data()),
        }
    }
}

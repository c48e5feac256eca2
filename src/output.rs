//! Rendering of listing entries.
//!
//! An entry is the header for one file (its path and an optional underline)
//! followed by the file's content, exactly as read. Entries are built as text
//! and only turned into bytes at the last moment, in the configured encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The platform's native line break.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// The platform's native line break.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Text encoding used both for reading sources and writing the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Strict UTF-8; invalid sequences are an error.
    #[default]
    Utf8,
    /// ISO-8859-1. Every byte is one character, so decoding never fails,
    /// but characters above U+00FF cannot be written.
    Latin1,
}

impl TextEncoding {
    /// Decodes raw bytes, or returns `None` if they are not valid in this encoding.
    pub fn decode(&self, bytes: Vec<u8>) -> Option<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).ok(),
            TextEncoding::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
        }
    }

    /// Encodes text, or returns `None` if some character has no representation.
    pub fn encode(&self, text: &str) -> Option<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Some(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => text.chars().map(|c| u8::try_from(c).ok()).collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => f.write_str("utf-8"),
            TextEncoding::Latin1 => f.write_str("latin-1"),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(format!("unsupported encoding: {}", s)),
        }
    }
}

/// Renders the header line(s) that precede a file's content.
///
/// The underline has one separator per character of `path`, not per byte.
/// Without a separator the underline line is left empty, but its line break
/// is still written.
pub fn render_header(path: &str, separator: Option<char>) -> String {
    let mut out = String::with_capacity(path.len() * 2 + 4 * LINE_ENDING.len());
    out.push_str(LINE_ENDING);
    out.push_str(LINE_ENDING);
    out.push_str(path);
    out.push_str(LINE_ENDING);
    if let Some(sep) = separator {
        out.extend(std::iter::repeat_n(sep, path.chars().count()));
    }
    out.push_str(LINE_ENDING);
    out
}

/// Renders a complete entry: header followed by the verbatim content.
pub fn render_entry(path: &str, separator: Option<char>, content: &str) -> String {
    let mut out = render_header(path, separator);
    out.push_str(content);
    out
}

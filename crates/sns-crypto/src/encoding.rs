//! # Canonical String Encoding
//!
//! Producers sign bytes, not text. The canonical string is encoded before
//! hashing, as UTF-8 unless the deployment is configured for Latin-1.

use std::fmt;
use std::str::FromStr;

use crate::error::{CryptoError, UnknownEncoding};

/// Byte encoding applied to the canonical string before hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: one byte per character, code points up to U+00FF.
    Latin1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Latin1 => "latin1",
        }
    }

    /// Encode `text`. Latin-1 fails on the first character above U+00FF.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| CryptoError::Unencodable {
                        character: c,
                        encoding: self.as_str(),
                    })
                })
                .collect(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = UnknownEncoding;

    /// Accepts `utf8`, `utf-8`, `latin1` and `binary`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "latin1" | "binary" => Ok(Self::Latin1),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Colour type and hex parsing.
//!
//! Token colour values are authored as 6-digit `#RRGGBB` strings. This
//! module owns that grammar and the per-platform transcodings (ARGB
//! literals for Compose and Android XML, channel components for Swift).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DstokError, Result};

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap())
}

/// Check a raw value against the schema's colour grammar: a `#` followed
/// by exactly six hex digits.
pub fn matches_hex(value: &str) -> bool {
    hex_re().is_match(value)
}

/// An opaque RGB colour parsed from a `#RRGGBB` token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex colour string (`#RRGGBB`, hash optional).
    ///
    /// Token values are required by the schema to carry exactly six hex
    /// digits, so shorthand and alpha forms are rejected here.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(DstokError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use the 6-digit #RRGGBB format".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Compose colour literal: `0xFFRRGGBB`.
    pub fn to_argb_literal(self) -> String {
        format!("0xFF{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Android XML colour resource value: `#FFRRGGBB`.
    pub fn to_xml_argb(self) -> String {
        format!("#FF{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = DstokError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| DstokError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

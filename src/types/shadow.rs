//! Shadow shorthand grammar and parsing.
//!
//! Shadow token values are authored either as the literal `none` or as a
//! shorthand of two or three unitless offsets, a blur radius in px, and
//! an `rgba()` colour: `0 2 8px rgba(0, 0, 0, 0.1)`.
//!
//! The schema check ([`matches_shorthand`]) is strict about that shape.
//! The emit-time parser ([`ShadowValue::parse`]) is lenient, accepting
//! an optional `px` suffix on every number and an optional spread, so
//! backends can still decompose values authored in close-enough formats.

use std::sync::OnceLock;

use regex::Regex;

fn shorthand_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+\s+){2,3}\d+px\s+rgba\(.+\)$|^none$").unwrap())
}

fn value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?x)
            (-?\d+(?:\.\d+)?)(?:px)?\s+          # x offset
            (-?\d+(?:\.\d+)?)(?:px)?\s+          # y offset
            (-?\d+(?:\.\d+)?)(?:px)?             # blur
            (?:\s+(-?\d+(?:\.\d+)?)(?:px)?)?     # optional spread
            \s+rgba\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*([0-9.]+)\s*\)",
        )
        .unwrap()
    })
}

/// Check a raw value against the schema's shadow shorthand grammar.
pub fn matches_shorthand(value: &str) -> bool {
    shorthand_re().is_match(value)
}

/// An `rgba()` shadow colour with raw channel strings preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowColour {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub alpha: String,
}

impl ShadowColour {
    /// Whether every channel is inside its conventional range
    /// (0-255 for RGB, 0-1 for alpha).
    pub fn channels_in_range(&self) -> bool {
        let alpha_ok = self
            .alpha
            .parse::<f64>()
            .map(|a| (0.0..=1.0).contains(&a))
            .unwrap_or(false);
        self.r <= 255 && self.g <= 255 && self.b <= 255 && alpha_ok
    }
}

/// A decomposed shadow shorthand.
///
/// Offsets, blur, and spread keep their authored numeric text so
/// backends emit them without reformatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowValue {
    pub x: String,
    pub y: String,
    pub blur: String,
    pub spread: Option<String>,
    pub colour: ShadowColour,
}

impl ShadowValue {
    /// Leniently parse a shadow shorthand. Returns `None` for `none`,
    /// other literals, or values without an `rgba()` colour.
    pub fn parse(value: &str) -> Option<Self> {
        let caps = value_re().captures(value)?;
        Some(Self {
            x: caps[1].to_string(),
            y: caps[2].to_string(),
            blur: caps[3].to_string(),
            spread: caps.get(4).map(|m| m.as_str().to_string()),
            colour: ShadowColour {
                r: caps[5].parse().ok()?,
                g: caps[6].parse().ok()?,
                b: caps[7].parse().ok()?,
                alpha: caps[8].to_string(),
            },
        })
    }
}

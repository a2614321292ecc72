//! Pixel dimension grammar and unit conversion.
//!
//! Dimensional token values are authored as `<number>px` (decimals and
//! negatives allowed). Every backend converts through this module so the
//! conversion rules cannot drift: web divides by 16 into rem, mobile
//! backends keep the magnitude as dp / point-size scalars.
//!
//! Conversions never fail. Input that does not match the px grammar is
//! returned verbatim: values such as `none`, raw numbers, or literals
//! already in a target unit pass through untouched.

use std::sync::OnceLock;

use regex::Regex;

/// Radius magnitude treated as "effectively infinite" (fully pill-shaped
/// corners). Never divided into rem; emitted unchanged.
pub const PILL_SENTINEL_PX: f64 = 9999.0;

fn px_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?\d+(?:\.\d+)?)px$").unwrap())
}

/// Parse a `<number>px` string into its pixel magnitude.
pub fn parse_px(value: &str) -> Option<f64> {
    px_re()
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Format a magnitude as its shortest decimal representation,
/// without a trailing `.0` for whole numbers.
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Convert a px value to rem for web output.
///
/// `0` collapses to unitless `0`; the pill sentinel stays `9999px`.
/// Non-px input passes through unchanged.
pub fn px_to_rem(value: &str) -> String {
    let Some(px) = parse_px(value) else {
        return value.to_string();
    };
    if px == PILL_SENTINEL_PX {
        return "9999px".to_string();
    }
    if px == 0.0 {
        return "0".to_string();
    }
    format!("{}rem", format_number(px / 16.0))
}

/// Convert a px value to a bare numeric scalar for mobile output
/// (dp on Android, CGFloat point-size on iOS).
///
/// Non-px input passes through unchanged.
pub fn px_to_scalar(value: &str) -> String {
    match parse_px(value) {
        Some(px) => format_number(px),
        None => value.to_string(),
    }
}

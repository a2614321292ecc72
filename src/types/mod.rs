//! Core domain types for dstok.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Token`, `TokenKind`, `Section` - the canonical token model entries
//! - `Colour` - hex colour parsing and platform transcodings
//! - `ShadowValue` - shadow shorthand decomposition
//! - dimension - the `<number>px` grammar and unit conversions
//! - `Component` - style declarations referencing tokens by path

mod colour;
mod component;
pub mod dimension;
mod shadow;
mod token;

pub use colour::{matches_hex, Colour};
pub use component::Component;
pub use dimension::{format_number, parse_px, px_to_rem, px_to_scalar, PILL_SENTINEL_PX};
pub use shadow::{matches_shorthand, ShadowColour, ShadowValue};
pub use token::{Section, Token, TokenKind};

//! dstok - Design token code generator
//!
//! A library for transforming design token JSON documents into theme code
//! for web (CSS/SCSS) and mobile (Jetpack Compose, Android XML, SwiftUI,
//! UIKit) targets.

pub mod cli;
pub mod emit;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use emit::{
    css_var_name, AndroidXmlEmitter, Artifact, ComposeEmitter, CssFlavor, Emitter, SwiftUiEmitter,
    UiKitEmitter, WebEmitter,
};
pub use error::{DstokError, Result};
pub use model::{find_refs, resolve_refs, ModelBuilder, TokenModel};
pub use parser::{Meta, TokenDocument};
pub use types::{
    matches_hex, matches_shorthand, parse_px, px_to_rem, px_to_scalar, Colour, Component, Section,
    ShadowValue, Token, TokenKind,
};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};

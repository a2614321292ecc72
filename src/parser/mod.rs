//! Parsing for design token JSON documents.
//!
//! A token file is a single JSON object:
//!
//! - `meta` - name, source, version, generated (free-form strings)
//! - `color`, `typography`, `spacing`, `borderRadius`, `shadow` - token
//!   sections; each token is an object with `value` and `type`
//! - `components` - optional style declarations referencing tokens via
//!   `{path}` syntax
//!
//! # Usage
//!
//! ```ignore
//! use dstok::parser::TokenDocument;
//!
//! let doc = TokenDocument::load(Path::new("tokens.json"))?;
//! let meta = doc.meta();
//! ```

mod document;

pub use document::{Meta, TokenDocument, REQUIRED_META_FIELDS, REQUIRED_SECTIONS};

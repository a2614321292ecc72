//! Emitters: pluggable renderers from the token model to target formats.
//!
//! Each backend implements [`Emitter`] and produces an ordered sequence of
//! named text artifacts. Emission is a pure function of the model and the
//! caller-supplied date stamp: no hidden state, stable artifact order,
//! byte-identical output for identical input. Backends hold no validation
//! or resolution logic of their own, and they degrade gracefully when
//! optional groups (font sources, shadows, components) are absent.

mod android_xml;
mod compose;
mod header;
mod swiftui;
mod uikit;
mod web;

pub use android_xml::AndroidXmlEmitter;
pub use compose::ComposeEmitter;
pub use swiftui::SwiftUiEmitter;
pub use uikit::UiKitEmitter;
pub use web::{css_var_name, CssFlavor, WebEmitter};

use crate::model::{naming, TokenModel};
use crate::types::{px_to_scalar, Section, Token};

/// One named output file produced by an emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub filename: String,
    pub content: String,
}

impl Artifact {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// A backend renderer over the resolved token model.
pub trait Emitter {
    /// Short backend name for status output.
    fn name(&self) -> &'static str;

    /// Render the model into named artifacts, in stable order.
    /// `date` is the header date stamp, supplied by the caller.
    fn emit(&self, model: &TokenModel, date: &str) -> Vec<Artifact>;
}

/// The three font slots every backend knows about, in emission order.
pub(crate) const FAMILY_SLOTS: [&str; 3] = ["heading", "body", "mono"];

/// `(slot, primary family name)` for the `font-family-*` tokens present.
pub(crate) fn font_families(model: &TokenModel) -> Vec<(&'static str, String)> {
    FAMILY_SLOTS
        .iter()
        .filter_map(|slot| {
            model
                .get(&format!("typography.font-family-{}", slot))
                .map(|t| (*slot, naming::font_family_display_name(&t.raw_value)))
        })
        .collect()
}

/// `(slot, source URL)` for the `font-source` tokens present.
pub(crate) fn font_sources(model: &TokenModel) -> Vec<(&'static str, String)> {
    FAMILY_SLOTS
        .iter()
        .filter_map(|slot| {
            model
                .get(&format!("typography.font-source.{}", slot))
                .map(|t| (*slot, t.raw_value.clone()))
        })
        .collect()
}

/// `(name, scalar value)` pairs for a nested typography group, with
/// dimensional values reduced to bare magnitudes.
pub(crate) fn group_scalars<'a>(model: &'a TokenModel, group: &str) -> Vec<(&'a str, String)> {
    model
        .typography_group(group)
        .map(|t| (t.name(), px_to_scalar(&t.raw_value)))
        .collect()
}

/// `(name, scalar value)` pairs for a flat dimensional section.
pub(crate) fn section_scalars(model: &TokenModel, section: Section) -> Vec<(&str, String)> {
    model
        .section_tokens(section)
        .map(|t| (t.name(), px_to_scalar(&t.raw_value)))
        .collect()
}

/// Look up a collected scalar by name, falling back to a default literal.
pub(crate) fn scalar_or<'a>(pairs: &'a [(&str, String)], name: &str, default: &'a str) -> &'a str {
    pairs
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or(default)
}

/// Shadow tokens decomposed by the lenient shorthand parser. Tokens whose
/// value does not decompose (e.g. `none`) are omitted.
pub(crate) fn parsed_shadows(model: &TokenModel) -> Vec<(&Token, crate::types::ShadowValue)> {
    model
        .section_tokens(Section::Shadow)
        .filter_map(|t| crate::types::ShadowValue::parse(&t.raw_value).map(|s| (t, s)))
        .collect()
}

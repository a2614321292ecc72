//! The canonical token model.
//!
//! `TokenModel` is the flat, resolved view of a token document that every
//! emitter consumes: tokens keyed by dotted path in document order, the
//! parsed metadata, and the ordered component declarations. The model is
//! immutable after construction: use `ModelBuilder` to create one, or
//! `TokenModel::build` to walk a parsed document.
//!
//! # Example
//!
//! ```ignore
//! use dstok::model::TokenModel;
//!
//! let model = TokenModel::build(&doc)?;
//! for token in model.section_tokens(Section::Color) {
//!     println!("{} = {}", token.path, token.raw_value);
//! }
//! ```

pub mod naming;
mod resolve;

pub use resolve::{find_refs, resolve_refs};

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{DstokError, Result};
use crate::parser::{Meta, TokenDocument};
use crate::types::{Component, Section, Token, TokenKind};

/// Typography sub-groups that nest one level, with the kind their member
/// tokens default to when the `type` field is absent or unrecognized.
const TYPOGRAPHY_GROUPS: [(&str, TokenKind); 5] = [
    ("font-size", TokenKind::Dimension),
    ("font-weight", TokenKind::FontWeight),
    ("line-height", TokenKind::Number),
    ("letter-spacing", TokenKind::Dimension),
    ("font-source", TokenKind::FontSource),
];

/// Flat path → token mapping over a whole document.
///
/// Iteration order is document order, section-major (color, typography,
/// spacing, borderRadius, shadow).
#[derive(Debug, Clone, Default)]
pub struct TokenModel {
    meta: Meta,
    tokens: HashMap<String, Token>,
    order: Vec<String>,
    components: Vec<Component>,
}

impl TokenModel {
    /// Walk a parsed document into a model.
    ///
    /// Structural assumptions only; full grammar checking belongs to the
    /// validator, which is expected to have run first. The one hard
    /// requirement is that every token object carries a `value`; a token
    /// position without one fails with the offending path.
    pub fn build(doc: &TokenDocument) -> Result<Self> {
        let mut builder = ModelBuilder::new().with_meta(doc.meta());

        for section in Section::ORDER {
            let Some(entries) = doc.section(section) else {
                continue;
            };
            if section == Section::Typography {
                build_typography(entries, &mut builder)?;
            } else {
                let kind = section_default_kind(section);
                for (key, value) in entries {
                    let path = format!("{}.{}", section.key(), key);
                    builder.add_token(leaf_token(path, section, kind, value)?);
                }
            }
        }

        if let Some(components) = doc.components() {
            for (name, props) in components {
                let Some(props) = props.as_object() else {
                    continue;
                };
                let mut component = Component::new(name.clone());
                for (prop, value) in props {
                    if let Some(value) = value.as_str() {
                        component.push_prop(prop.clone(), value);
                    }
                }
                builder.add_component(component);
            }
        }

        Ok(builder.build())
    }

    /// Document metadata.
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Look up a token by its dotted path.
    pub fn get(&self, path: &str) -> Option<&Token> {
        self.tokens.get(path)
    }

    /// Whether a token path exists in the model.
    pub fn contains(&self, path: &str) -> bool {
        self.tokens.contains_key(path)
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.order.iter().filter_map(|path| self.tokens.get(path))
    }

    /// Tokens of one section, in document order.
    pub fn section_tokens(&self, section: Section) -> impl Iterator<Item = &Token> {
        self.tokens().filter(move |t| t.section == section)
    }

    /// Tokens of a nested typography group (`font-size`, `font-weight`,
    /// ...), in document order.
    pub fn typography_group(&self, group: &str) -> impl Iterator<Item = &Token> {
        let prefix = format!("typography.{}.", group);
        self.tokens()
            .filter(move |t| t.path.starts_with(&prefix))
    }

    /// Component declarations in document order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Total number of tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the model holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builder for constructing a `TokenModel`.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    meta: Meta,
    tokens: HashMap<String, Token>,
    order: Vec<String>,
    components: Vec<Component>,
}

impl ModelBuilder {
    /// Create a new model builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document metadata.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Add a token. The path is recorded once; re-adding a path replaces
    /// the token without changing its position.
    pub fn add_token(&mut self, token: Token) -> &mut Self {
        if !self.tokens.contains_key(&token.path) {
            self.order.push(token.path.clone());
        }
        self.tokens.insert(token.path.clone(), token);
        self
    }

    /// Add a component declaration.
    pub fn add_component(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Finish building.
    pub fn build(self) -> TokenModel {
        TokenModel {
            meta: self.meta,
            tokens: self.tokens,
            order: self.order,
            components: self.components,
        }
    }
}

/// Default token kind for flat sections.
fn section_default_kind(section: Section) -> TokenKind {
    match section {
        Section::Color => TokenKind::Color,
        Section::Spacing | Section::BorderRadius => TokenKind::Dimension,
        Section::Shadow => TokenKind::Shadow,
        Section::Typography => TokenKind::FontFamily,
    }
}

/// Build one token from a token-position JSON value.
///
/// The `type` field wins when present and recognized; otherwise the
/// positional default applies.
fn leaf_token(path: String, section: Section, default_kind: TokenKind, value: &Value) -> Result<Token> {
    let obj = value
        .as_object()
        .ok_or_else(|| DstokError::MalformedToken { path: path.clone() })?;
    let raw = obj
        .get("value")
        .ok_or_else(|| DstokError::MalformedToken { path: path.clone() })?;

    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .and_then(TokenKind::from_type)
        .unwrap_or(default_kind);

    Ok(Token::new(path, section, kind, raw_value_string(raw)))
}

/// Render a token's `value` field as its authored string.
fn raw_value_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Walk the typography section: known one-level groups nest, `font-family-*`
/// and any other object carrying a `value` stay flat, and unrecognized
/// nested objects are treated as groups of number tokens.
fn build_typography(entries: &Map<String, Value>, builder: &mut ModelBuilder) -> Result<()> {
    for (key, value) in entries {
        let path = format!("typography.{}", key);
        let Some(obj) = value.as_object() else {
            return Err(DstokError::MalformedToken { path });
        };

        if obj.contains_key("value") {
            builder.add_token(leaf_token(
                path,
                Section::Typography,
                TokenKind::FontFamily,
                value,
            )?);
            continue;
        }

        let group_kind = TYPOGRAPHY_GROUPS
            .iter()
            .find(|(name, _)| *name == key.as_str())
            .map(|(_, kind)| *kind)
            .unwrap_or(TokenKind::Number);

        for (subkey, subvalue) in obj {
            let subpath = format!("{}.{}", path, subkey);
            builder.add_token(leaf_token(
                subpath,
                Section::Typography,
                group_kind,
                subvalue,
            )?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> TokenDocument {
        TokenDocument::parse(
            r##"{
                "meta": {"name": "Test", "source": "test.dev", "version": "1.0.0", "generated": "2025-06-01"},
                "color": {
                    "primary": {"value": "#6C3BF4", "type": "color"},
                    "primary-light": {"value": "#9B72F9", "type": "color"}
                },
                "typography": {
                    "font-family-body": {"value": "'Inter', sans-serif", "type": "fontFamily"},
                    "font-size": {
                        "base": {"value": "16px", "type": "dimension"},
                        "lg": {"value": "18px", "type": "dimension"}
                    },
                    "font-weight": {"bold": {"value": "700", "type": "fontWeight"}},
                    "line-height": {"normal": {"value": 1.5, "type": "number"}},
                    "font-source": {"body": {"value": "system", "type": "fontSource"}}
                },
                "spacing": {
                    "2": {"value": "8px", "type": "dimension"},
                    "4": {"value": "16px", "type": "dimension"}
                },
                "borderRadius": {"full": {"value": "9999px", "type": "dimension"}},
                "shadow": {"sm": {"value": "0 1 2px rgba(0, 0, 0, 0.05)", "type": "shadow"}},
                "components": {
                    "button-primary": {
                        "background": "{color.primary}",
                        "padding": "{spacing.2} {spacing.4}"
                    }
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_build_collects_flat_paths() {
        let model = TokenModel::build(&sample_doc()).unwrap();

        assert!(model.contains("color.primary"));
        assert!(model.contains("typography.font-family-body"));
        assert!(model.contains("typography.font-size.lg"));
        assert!(model.contains("typography.font-source.body"));
        assert!(model.contains("spacing.4"));
        assert!(model.contains("borderRadius.full"));
        assert!(model.contains("shadow.sm"));
        // 2 colors + 6 typography + 2 spacing + 1 radius + 1 shadow
        assert_eq!(model.len(), 12);
    }

    #[test]
    fn test_build_preserves_document_order() {
        let model = TokenModel::build(&sample_doc()).unwrap();
        let color_paths: Vec<&str> = model
            .section_tokens(Section::Color)
            .map(|t| t.path.as_str())
            .collect();
        assert_eq!(color_paths, vec!["color.primary", "color.primary-light"]);

        // Sections appear in canonical order regardless of JSON layout
        let first = model.tokens().next().unwrap();
        assert_eq!(first.section, Section::Color);
    }

    #[test]
    fn test_kinds_from_type_field() {
        let model = TokenModel::build(&sample_doc()).unwrap();
        assert_eq!(model.get("color.primary").unwrap().kind, TokenKind::Color);
        assert_eq!(
            model.get("typography.font-weight.bold").unwrap().kind,
            TokenKind::FontWeight
        );
        assert_eq!(
            model.get("typography.line-height.normal").unwrap().kind,
            TokenKind::Number
        );
    }

    #[test]
    fn test_kind_inferred_when_type_missing() {
        let doc = TokenDocument::parse(
            r##"{"spacing": {"4": {"value": "16px"}},
                "typography": {"font-size": {"sm": {"value": "14px"}}}}"##,
        )
        .unwrap();
        let model = TokenModel::build(&doc).unwrap();
        assert_eq!(model.get("spacing.4").unwrap().kind, TokenKind::Dimension);
        assert_eq!(
            model.get("typography.font-size.sm").unwrap().kind,
            TokenKind::Dimension
        );
    }

    #[test]
    fn test_numeric_values_stringified() {
        let model = TokenModel::build(&sample_doc()).unwrap();
        assert_eq!(
            model.get("typography.line-height.normal").unwrap().raw_value,
            "1.5"
        );
    }

    #[test]
    fn test_normalized_magnitude_on_dimensions() {
        let model = TokenModel::build(&sample_doc()).unwrap();
        assert_eq!(
            model.get("spacing.4").unwrap().normalized_magnitude(),
            Some(16.0)
        );
        assert_eq!(
            model.get("color.primary").unwrap().normalized_magnitude(),
            None
        );
    }

    #[test]
    fn test_missing_value_names_offending_path() {
        let doc = TokenDocument::parse(r##"{"color": {"primary": {"type": "color"}}}"##).unwrap();
        let err = TokenModel::build(&doc).unwrap_err();
        match err {
            DstokError::MalformedToken { path } => assert_eq!(path, "color.primary"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_components_in_document_order() {
        let model = TokenModel::build(&sample_doc()).unwrap();
        let comps = model.components();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].name, "button-primary");
        assert_eq!(comps[0].props[0].0, "background");
    }

    #[test]
    fn test_typography_group_iteration() {
        let model = TokenModel::build(&sample_doc()).unwrap();
        let sizes: Vec<&str> = model
            .typography_group("font-size")
            .map(|t| t.name())
            .collect();
        assert_eq!(sizes, vec!["base", "lg"]);
    }
}

//! Schema checks for token documents.
//!
//! Each check takes a `&TokenDocument` and returns a `ValidationResult`.
//! Checks are independent of each other and all of them run even when
//! earlier ones fail, so one pass reports every violation in the file.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::model::find_refs;
use crate::parser::{TokenDocument, REQUIRED_META_FIELDS, REQUIRED_SECTIONS};
use crate::types::{matches_hex, matches_shorthand, parse_px, Section, ShadowValue};

use super::diagnostic::{Diagnostic, ValidationResult};

/// JSON value type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a JSON value for an error message: strings bare, the rest as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Check for the six required top-level sections.
pub fn check_required_sections(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for section in REQUIRED_SECTIONS {
        if doc.get(section).is_none() {
            result.push(
                Diagnostic::error(
                    "dstok::schema::missing-section",
                    format!("Missing required section: '{}'", section),
                )
                .with_help("Every token file needs meta plus the five token sections"),
            );
        }
    }

    result
}

/// Check for the four required metadata fields.
pub fn check_meta_fields(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let meta = doc.object("meta");

    for field in REQUIRED_META_FIELDS {
        let present = meta.map(|m| m.contains_key(field)).unwrap_or(false);
        if !present {
            result.error(
                "dstok::schema::missing-meta-field",
                format!("Missing required meta field: '{}'", field),
            );
        }
    }

    result
}

/// Check colour tokens: object shape, hex grammar, and type tag.
pub fn check_color_tokens(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Some(colors) = doc.section(Section::Color) else {
        return result;
    };

    for (name, token) in colors {
        let Some(obj) = token.as_object() else {
            result.error(
                "dstok::schema::bad-color",
                format!(
                    "color.{}: expected object, got {}",
                    name,
                    json_type_name(token)
                ),
            );
            continue;
        };

        match obj.get("value") {
            None => result.error(
                "dstok::schema::bad-color",
                format!("color.{}: missing 'value'", name),
            ),
            Some(value) => {
                let ok = value.as_str().map(matches_hex).unwrap_or(false);
                if !ok {
                    result.error(
                        "dstok::schema::bad-color",
                        format!(
                            "color.{}: value '{}' is not a valid 6-digit hex",
                            name,
                            display_value(value)
                        ),
                    );
                }
            }
        }

        match obj.get("type") {
            None => result.error(
                "dstok::schema::bad-color",
                format!("color.{}: missing 'type'", name),
            ),
            Some(ty) => {
                if ty.as_str() != Some("color") {
                    result.error(
                        "dstok::schema::bad-color",
                        format!(
                            "color.{}: type should be 'color', got '{}'",
                            name,
                            display_value(ty)
                        ),
                    );
                }
            }
        }
    }

    result
}

/// Check typography tokens: font sizes in px, font weights in range.
pub fn check_typography_tokens(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Some(typo) = doc.section(Section::Typography) else {
        return result;
    };

    if let Some(sizes) = typo.get("font-size").and_then(Value::as_object) {
        for (name, value) in token_values(sizes) {
            let ok = value.as_str().map(parse_px).unwrap_or(None).is_some();
            if !ok {
                result.error(
                    "dstok::schema::bad-dimension",
                    format!(
                        "typography.font-size.{}: value '{}' should be in px",
                        name,
                        display_value(value)
                    ),
                );
            }
        }
    }

    if let Some(weights) = typo.get("font-weight").and_then(Value::as_object) {
        for (name, value) in token_values(weights) {
            match integer_value(value) {
                Some(w) => {
                    if !(100..=900).contains(&w) || w % 100 != 0 {
                        result.error(
                            "dstok::schema::bad-font-weight",
                            format!(
                                "typography.font-weight.{}: value '{}' should be 100-900 in increments of 100",
                                name,
                                display_value(value)
                            ),
                        );
                    }
                }
                None => result.error(
                    "dstok::schema::bad-font-weight",
                    format!(
                        "typography.font-weight.{}: value '{}' should be numeric",
                        name,
                        display_value(value)
                    ),
                ),
            }
        }
    }

    result
}

/// Check spacing and borderRadius tokens for the px grammar.
pub fn check_dimension_tokens(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for section in [Section::Spacing, Section::BorderRadius] {
        let Some(entries) = doc.section(section) else {
            continue;
        };
        for (name, value) in token_values(entries) {
            let ok = value.as_str().map(parse_px).unwrap_or(None).is_some();
            if !ok {
                result.error(
                    "dstok::schema::bad-dimension",
                    format!(
                        "{}.{}: value '{}' should be in px",
                        section.key(),
                        name,
                        display_value(value)
                    ),
                );
            }
        }
    }

    result
}

/// Check shadow tokens: type tag, shorthand grammar, and rgba() channels.
///
/// Channel-range violations are warnings, not errors: the shorthand
/// grammar itself does not constrain the rgba() interior, and out-of-range
/// channels still render as inspectable output.
pub fn check_shadow_tokens(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Some(shadows) = doc.section(Section::Shadow) else {
        return result;
    };

    for (name, token) in shadows {
        let Some(obj) = token.as_object() else {
            continue;
        };

        if let Some(ty) = obj.get("type") {
            if ty.as_str() != Some("shadow") {
                result.error(
                    "dstok::schema::bad-shadow",
                    format!(
                        "shadow.{}: type should be 'shadow', got '{}'",
                        name,
                        display_value(ty)
                    ),
                );
            }
        }

        let Some(value) = obj.get("value").and_then(Value::as_str) else {
            continue;
        };

        if !matches_shorthand(value) {
            result.push(
                Diagnostic::error(
                    "dstok::schema::bad-shadow",
                    format!(
                        "shadow.{}: value '{}' does not match the shadow shorthand",
                        name, value
                    ),
                )
                .with_help("Use 'none' or '<x> <y> <blur>px rgba(r, g, b, a)'"),
            );
        } else if value != "none" {
            match ShadowValue::parse(value) {
                Some(shadow) if !shadow.colour.channels_in_range() => result.warning(
                    "dstok::schema::shadow-colour",
                    format!(
                        "shadow.{}: rgba() channels out of range in '{}'",
                        name, value
                    ),
                ),
                None => result.warning(
                    "dstok::schema::shadow-colour",
                    format!(
                        "shadow.{}: could not read rgba() channels in '{}'",
                        name, value
                    ),
                ),
                _ => {}
            }
        }
    }

    result
}

/// Check that every `{path}` reference in component properties points at
/// a collected token path.
pub fn check_component_refs(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Some(components) = doc.components() else {
        return result;
    };

    let paths = collect_token_paths(doc);

    for (comp_name, comp) in components {
        let Some(props) = comp.as_object() else {
            continue;
        };
        for (prop, value) in props {
            let Some(value) = value.as_str() else {
                continue;
            };
            for reference in find_refs(value) {
                if !paths.contains(reference) {
                    result.error(
                        "dstok::schema::unknown-reference",
                        format!(
                            "components.{}.{}: reference '{{{}}}' not found in tokens",
                            comp_name, prop, reference
                        ),
                    );
                }
            }
        }
    }

    result
}

/// Collect every token path in the document, excluding the `meta` and
/// `components` sections. A terminal token is any object carrying both
/// `value` and `type` keys; other objects are walked as groups.
pub fn collect_token_paths(doc: &TokenDocument) -> HashSet<String> {
    let mut paths = HashSet::new();

    for (key, value) in doc.root() {
        if key == "meta" || key == "components" {
            continue;
        }
        if let Some(obj) = value.as_object() {
            walk_paths(obj, key, &mut paths);
        }
    }

    paths
}

fn walk_paths(obj: &Map<String, Value>, prefix: &str, paths: &mut HashSet<String>) {
    if obj.contains_key("value") && obj.contains_key("type") {
        paths.insert(prefix.to_string());
        return;
    }
    for (key, value) in obj {
        if let Some(child) = value.as_object() {
            walk_paths(child, &format!("{}.{}", prefix, key), paths);
        }
    }
}

/// Iterate the `value` fields of token objects inside a section map.
fn token_values(section: &Map<String, Value>) -> impl Iterator<Item = (&String, &Value)> {
    section.iter().filter_map(|(name, token)| {
        token
            .as_object()
            .and_then(|obj| obj.get("value"))
            .map(|value| (name, value))
    })
}

/// Parse an integer from a JSON string or number value.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

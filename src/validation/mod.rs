//! Schema validation for token documents.
//!
//! Runs a suite of independent checks against a parsed document and
//! accumulates every violation rather than failing fast, so an author fixing a
//! token file gets the complete list in one run. Used by `dstok validate`
//! and, as a gate, by every generator subcommand.

pub mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::parser::TokenDocument;

/// Run all schema checks against a document.
///
/// Pure: reads the document, touches nothing else. Every check runs even
/// when earlier ones fail.
pub fn validate_document(doc: &TokenDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_required_sections(doc));
    result.merge(checks::check_meta_fields(doc));
    result.merge(checks::check_color_tokens(doc));
    result.merge(checks::check_typography_tokens(doc));
    result.merge(checks::check_dimension_tokens(doc));
    result.merge(checks::check_shadow_tokens(doc));
    result.merge(checks::check_component_refs(doc));

    result
}

/// Render a validation report: a one-line summary followed by a bulleted
/// diagnostic list. The caller decides which stream it goes to.
pub fn format_report(result: &ValidationResult) -> String {
    let mut out = String::new();

    if result.has_errors() {
        out.push_str(&format!(
            "Validation failed with {} error(s):\n",
            result.error_count()
        ));
        for d in result.iter() {
            match d.severity {
                Severity::Error => out.push_str(&format!("  - {}\n", d.message)),
                Severity::Warning => out.push_str(&format!("  - warning: {}\n", d.message)),
            }
        }
    } else if result.has_warnings() {
        out.push_str(&format!(
            "Validation passed with {} warning(s):\n",
            result.warning_count()
        ));
        for d in result.iter() {
            out.push_str(&format!("  - warning: {}\n", d.message));
        }
    } else {
        out.push_str("Validation passed. All tokens conform to the schema.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_DOC: &str = r##"{
        "meta": {"name": "Test", "source": "test.dev", "version": "1.0.0", "generated": "2025-06-01"},
        "color": {"primary": {"value": "#FF0000", "type": "color"}},
        "typography": {
            "font-family-body": {"value": "Inter, sans-serif", "type": "fontFamily"},
            "font-size": {"base": {"value": "16px", "type": "dimension"}},
            "font-weight": {"bold": {"value": "700", "type": "fontWeight"}}
        },
        "spacing": {"4": {"value": "16px", "type": "dimension"}},
        "borderRadius": {"md": {"value": "8px", "type": "dimension"}},
        "shadow": {"sm": {"value": "0 1 2px rgba(0, 0, 0, 0.05)", "type": "shadow"}},
        "components": {"button-primary": {"background": "{color.primary}"}}
    }"##;

    #[test]
    fn test_valid_document_has_no_errors() {
        let doc = TokenDocument::parse(VALID_DOC).unwrap();
        let result = validate_document(&doc);
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_missing_section_is_independent_of_other_errors() {
        // borderRadius removed and a colour broken: both reported
        let source = VALID_DOC.replace("\"borderRadius\"", "\"radii\"");
        let source = source.replace("#FF0000", "red");
        let doc = TokenDocument::parse(&source).unwrap();
        let result = validate_document(&doc);

        let missing: Vec<&str> = result
            .iter()
            .filter(|d| d.message.starts_with("Missing required section"))
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(missing, vec!["Missing required section: 'borderRadius'"]);
        assert!(result
            .iter()
            .any(|d| d.message.contains("not a valid 6-digit hex")));
    }

    #[test]
    fn test_dangling_reference_reported() {
        let source = VALID_DOC.replace("{color.primary}", "{color.missing}");
        let doc = TokenDocument::parse(&source).unwrap();
        let result = validate_document(&doc);
        assert_eq!(result.error_count(), 1);
        assert!(result
            .iter()
            .next()
            .unwrap()
            .message
            .contains("reference '{color.missing}' not found"));
    }

    #[test]
    fn test_format_report_failure() {
        let doc = TokenDocument::parse("{}").unwrap();
        let result = validate_document(&doc);
        let report = format_report(&result);
        assert!(report.starts_with(&format!(
            "Validation failed with {} error(s):\n",
            result.error_count()
        )));
        assert!(report.contains("  - Missing required section: 'color'\n"));
    }

    #[test]
    fn test_format_report_success() {
        let doc = TokenDocument::parse(VALID_DOC).unwrap();
        let result = validate_document(&doc);
        assert_eq!(
            format_report(&result),
            "Validation passed. All tokens conform to the schema.\n"
        );
    }
}

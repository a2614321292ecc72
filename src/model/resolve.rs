//! Symbolic token reference resolution.
//!
//! Component property values embed `{token.path}` spans interleaved with
//! literal text. Resolution scans for those spans and maps each resolvable
//! path through a backend-supplied naming closure; the closure is the
//! only point where backends differ. Unresolved spans are left verbatim so
//! a reference that slipped past validation stays visible in the output
//! instead of disappearing.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([\w.-]+)\}").unwrap())
}

/// All `{path}` reference paths embedded in a value, braces stripped.
pub fn find_refs(value: &str) -> Vec<&str> {
    ref_re()
        .captures_iter(value)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Replace each resolvable `{path}` span with the backend reference
/// returned by `name_for`. Spans the closure cannot resolve pass through
/// unchanged.
pub fn resolve_refs(value: &str, mut name_for: impl FnMut(&str) -> Option<String>) -> String {
    ref_re()
        .replace_all(value, |caps: &Captures| {
            name_for(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_refs() {
        assert_eq!(find_refs("{color.primary}"), vec!["color.primary"]);
        assert_eq!(
            find_refs("1px solid {color.border-light} inset {spacing.2}"),
            vec!["color.border-light", "spacing.2"]
        );
        assert!(find_refs("#FFFFFF").is_empty());
    }

    #[test]
    fn test_resolve_single_ref() {
        let out = resolve_refs("{color.primary}", |path| {
            (path == "color.primary").then(|| "var(--color-primary)".to_string())
        });
        assert_eq!(out, "var(--color-primary)");
    }

    #[test]
    fn test_resolve_interleaved_literals() {
        let out = resolve_refs("1px solid {color.border}", |_| {
            Some("var(--color-border)".to_string())
        });
        assert_eq!(out, "1px solid var(--color-border)");
    }

    #[test]
    fn test_unresolved_ref_left_verbatim() {
        let out = resolve_refs("{color.missing} {color.primary}", |path| {
            (path == "color.primary").then(|| "var(--color-primary)".to_string())
        });
        assert_eq!(out, "{color.missing} var(--color-primary)");
    }

    #[test]
    fn test_braces_without_path_chars_ignored() {
        let out = resolve_refs("content: \"{}\"", |_| Some("resolved".to_string()));
        assert_eq!(out, "content: \"{}\"");
    }
}

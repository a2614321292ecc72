//! Token name case transforms.
//!
//! Token names are authored in kebab-case (`primary-light`, `2xl`). Each
//! backend has its own identifier convention; these transforms are the
//! single source for all of them so names stay consistent across outputs.

/// `primary-light` → `PrimaryLight` (Kotlin vals).
pub fn pascal_case(name: &str) -> String {
    name.split('-').map(capitalize_first).collect()
}

/// `primary-light` → `primaryLight` (Swift constants).
pub fn camel_case(name: &str) -> String {
    let mut parts = name.split('-');
    let mut out = String::new();
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str(&capitalize_first(part));
    }
    out
}

/// `primary-light` → `primary_light` (Android XML resources).
pub fn snake_case(name: &str) -> String {
    name.replace('-', "_")
}

/// Uppercase the first character, leaving the rest untouched.
/// Digit-led names (`2xl`) come through unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Extract the primary family name from a CSS font-family stack:
/// `'Space Grotesk', sans-serif` → `Space Grotesk`.
pub fn font_family_display_name(raw: &str) -> String {
    raw.split(',')
        .next()
        .unwrap_or(raw)
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("primary-light"), "PrimaryLight");
        assert_eq!(pascal_case("primary"), "Primary");
        assert_eq!(pascal_case("2xl"), "2xl");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("primary-light"), "primaryLight");
        assert_eq!(camel_case("text-secondary"), "textSecondary");
        assert_eq!(camel_case("md"), "md");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("primary-light"), "primary_light");
        assert_eq!(snake_case("4"), "4");
    }

    #[test]
    fn test_capitalize_first_keeps_tail() {
        assert_eq!(capitalize_first("base"), "Base");
        assert_eq!(capitalize_first("2xl"), "2xl");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_font_family_display_name() {
        assert_eq!(
            font_family_display_name("'Space Grotesk', sans-serif"),
            "Space Grotesk"
        );
        assert_eq!(font_family_display_name("Inter"), "Inter");
        assert_eq!(
            font_family_display_name("\"JetBrains Mono\", monospace"),
            "JetBrains Mono"
        );
    }
}

//! Generated-file header banners.
//!
//! Every artifact opens with the same metadata block (name, source,
//! version, date stamp, format label) rendered in the target language's
//! comment syntax.

use crate::parser::Meta;

/// CSS/SCSS block comment header.
pub fn css_header(meta: &Meta, format_label: &str, date: &str) -> Vec<String> {
    vec![
        format!("/* {}", meta.name),
        format!(" * Source: {}", meta.source),
        format!(" * Version: {}", meta.version),
        format!(" * Generated: {}", date),
        format!(" * Format: {}", format_label),
        " */".to_string(),
    ]
}

/// Kotlin doc-comment header.
pub fn doc_comment_header(meta: &Meta, target: &str, date: &str) -> Vec<String> {
    vec![
        "/**".to_string(),
        format!(" * {}", meta.name),
        format!(" * Source: {}", meta.source),
        format!(" * Version: {}", meta.version),
        format!(" * Generated: {}", date),
        format!(" * Format: {}", target),
        " */".to_string(),
    ]
}

/// Android XML prolog and comment header.
pub fn xml_header(meta: &Meta, target: &str, date: &str) -> Vec<String> {
    vec![
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>".to_string(),
        "<!--".to_string(),
        format!("  {}", meta.name),
        format!("  Source: {}", meta.source),
        format!("  Version: {}", meta.version),
        format!("  Generated: {}", date),
        format!("  Format: {}", target),
        "-->".to_string(),
    ]
}

/// Swift line-comment header.
pub fn swift_header(meta: &Meta, target: &str, date: &str) -> Vec<String> {
    vec![
        "//".to_string(),
        format!("// {}", meta.name),
        format!("// Source: {}", meta.source),
        format!("// Version: {}", meta.version),
        format!("// Generated: {}", date),
        format!("// Format: {}", target),
        "//".to_string(),
    ]
}

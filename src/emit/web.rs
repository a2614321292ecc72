//! Web output: CSS custom properties or SCSS variables.
//!
//! Both flavors share the same token collection and naming; SCSS adds
//! per-section maps, and component declarations render as utility classes
//! (CSS) or mixins (SCSS). Reference resolution goes through the shared
//! resolver with this backend's variable syntax as the naming function:
//! `var(--name)` for CSS, `$name` for SCSS.

use clap::ValueEnum;

use crate::model::{resolve_refs, TokenModel};
use crate::types::{px_to_rem, Component, Section, Token, TokenKind};

use super::header::css_header;
use super::{Artifact, Emitter};

/// Output flavor for the web backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CssFlavor {
    #[default]
    Css,
    Scss,
}

/// Variable prefix per flat section.
fn section_prefix(section: Section) -> &'static str {
    match section {
        Section::Color => "color",
        Section::Spacing => "space",
        Section::BorderRadius => "radius",
        Section::Shadow => "shadow",
        Section::Typography => "typography",
    }
}

/// Variable prefixes for typography keys and groups.
const TYPOGRAPHY_PREFIX: [(&str, &str); 7] = [
    ("font-family-heading", "font-heading"),
    ("font-family-body", "font-body"),
    ("font-family-mono", "font-mono"),
    ("font-size", "font-size"),
    ("font-weight", "font-weight"),
    ("line-height", "line-height"),
    ("letter-spacing", "letter-spacing"),
];

fn typography_prefix(key: &str) -> &str {
    TYPOGRAPHY_PREFIX
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, p)| *p)
        .unwrap_or(key)
}

/// The CSS custom property name for a token.
pub fn css_var_name(token: &Token) -> String {
    let mut segments = token.path.split('.').skip(1);
    let key = segments.next().unwrap_or_default();
    let sub = segments.next();

    if token.section == Section::Typography {
        match sub {
            Some(sub) => format!("--{}-{}", typography_prefix(key), sub),
            None => format!("--{}", typography_prefix(key)),
        }
    } else {
        format!("--{}-{}", section_prefix(token.section), key)
    }
}

/// The SCSS variable name for a token.
fn scss_var_name(token: &Token) -> String {
    format!("${}", css_var_name(token).trim_start_matches('-'))
}

/// Convert a token's raw value for web output. Dimensions become rem;
/// everything else passes through.
fn web_value(token: &Token) -> String {
    match token.kind {
        TokenKind::Dimension => px_to_rem(&token.raw_value),
        _ => token.raw_value.to_string(),
    }
}

/// Tokens in web emission order: document order, minus font sources
/// (those become `@import` lines instead of variables).
fn web_tokens(model: &TokenModel) -> Vec<&Token> {
    model
        .tokens()
        .filter(|t| !t.path.starts_with("typography.font-source."))
        .collect()
}

/// Unique non-`system` font source URLs, in document order.
fn font_import_urls(model: &TokenModel) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for token in model.typography_group("font-source") {
        let url = token.raw_value.as_str();
        if url != "system" && !urls.iter().any(|u| u == url) {
            urls.push(url.to_string());
        }
    }
    urls
}

/// Component properties that map to pseudo-state selectors rather than
/// flat declarations.
const STATE_PROPS: [(&str, (&str, &str)); 6] = [
    ("hover-background", ("&:hover", "background")),
    ("hover-color", ("&:hover", "color")),
    ("focus-border", ("&:focus", "border-color")),
    ("active-color", ("&.active, &[aria-current]", "color")),
    ("active-background", ("&.active, &[aria-current]", "background")),
    ("placeholder-color", ("&::placeholder", "color")),
];

/// The web backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebEmitter {
    pub flavor: CssFlavor,
    /// Also render component utility classes / mixins.
    pub components: bool,
}

impl WebEmitter {
    pub fn new(flavor: CssFlavor, components: bool) -> Self {
        Self { flavor, components }
    }

    fn generate(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = match self.flavor {
            CssFlavor::Css => self.generate_css(model, date),
            CssFlavor::Scss => self.generate_scss(model, date),
        };

        if self.components && !model.components().is_empty() {
            // Separate the token block and the component block by one
            // blank line, whatever the token block ended with.
            while lines.last().is_some_and(|l| l.is_empty()) {
                lines.pop();
            }
            lines.push(String::new());
            lines.extend(self.generate_components(model));
        }

        lines.join("\n")
    }

    fn generate_css(&self, model: &TokenModel, date: &str) -> Vec<String> {
        let mut lines = css_header(model.meta(), "CSS Custom Properties", date);
        lines.push(String::new());

        let imports = font_import_urls(model);
        if !imports.is_empty() {
            for url in &imports {
                lines.push(format!("@import url('{}');", url));
            }
            lines.push(String::new());
        }

        lines.push(":root {".to_string());
        let mut current: Option<Section> = None;
        for token in web_tokens(model) {
            if current != Some(token.section) {
                if current.is_some() {
                    lines.push(String::new());
                }
                lines.push(format!("  /* {} */", token.section.label()));
                current = Some(token.section);
            }
            lines.push(format!("  {}: {};", css_var_name(token), web_value(token)));
        }
        lines.push("}".to_string());
        lines.push(String::new());
        lines
    }

    fn generate_scss(&self, model: &TokenModel, date: &str) -> Vec<String> {
        let mut lines = css_header(model.meta(), "SCSS", date);
        lines.push(String::new());

        let imports = font_import_urls(model);
        if !imports.is_empty() {
            for url in &imports {
                lines.push(format!("@import url('{}');", url));
            }
            lines.push(String::new());
        }

        let tokens = web_tokens(model);
        let mut current: Option<Section> = None;
        for &token in &tokens {
            if current != Some(token.section) {
                if current.is_some() {
                    lines.push(String::new());
                }
                lines.push(format!("// {}", token.section.label()));
                current = Some(token.section);
            }
            lines.push(format!("{}: {};", scss_var_name(token), web_value(token)));
        }

        lines.push(String::new());
        lines.push("// Maps".to_string());
        for section in Section::ORDER {
            let section_tokens: Vec<&Token> = tokens
                .iter()
                .copied()
                .filter(|t| t.section == section)
                .collect();
            if section_tokens.is_empty() {
                continue;
            }
            let map_name = match section {
                Section::Color => "$colors",
                Section::Typography => "$typography",
                Section::Spacing => "$spacing",
                Section::BorderRadius => "$radii",
                Section::Shadow => "$shadows",
            };
            lines.push(format!("{}: (", map_name));
            for token in section_tokens {
                let key = scss_var_name(token);
                lines.push(format!(
                    "  \"{}\": {},",
                    key.trim_start_matches('$'),
                    web_value(token)
                ));
            }
            lines.push(");".to_string());
        }

        lines.push(String::new());
        lines
    }

    fn generate_components(&self, model: &TokenModel) -> Vec<String> {
        let mut lines = Vec::new();
        match self.flavor {
            CssFlavor::Css => lines.push("/* Component Utility Classes */".to_string()),
            CssFlavor::Scss => lines.push("// Component Mixins".to_string()),
        }
        lines.push(String::new());

        for component in model.components() {
            let (regular, states) = self.split_props(model, component);
            match self.flavor {
                CssFlavor::Scss => {
                    lines.push(format!("@mixin {} {{", component.name));
                    for (prop, value) in &regular {
                        lines.push(format!("  {}: {};", prop, value));
                    }
                    for (selector, decls) in &states {
                        lines.push(format!("  {} {{", selector));
                        for (prop, value) in decls {
                            lines.push(format!("    {}: {};", prop, value));
                        }
                        lines.push("  }".to_string());
                    }
                    lines.push("}".to_string());
                }
                CssFlavor::Css => {
                    lines.push(format!(".{} {{", component.name));
                    for (prop, value) in &regular {
                        lines.push(format!("  {}: {};", prop, value));
                    }
                    for (selector, decls) in &states {
                        let css_selector = selector.replace('&', &format!(".{}", component.name));
                        lines.push("}".to_string());
                        lines.push(String::new());
                        lines.push(format!("{} {{", css_selector));
                        for (prop, value) in decls {
                            lines.push(format!("  {}: {};", prop, value));
                        }
                    }
                    lines.push("}".to_string());
                }
            }
            lines.push(String::new());
        }

        lines
    }

    /// Split component properties into flat declarations and pseudo-state
    /// selector groups, resolving token references in both.
    fn split_props(
        &self,
        model: &TokenModel,
        component: &Component,
    ) -> (Vec<(String, String)>, Vec<(&'static str, Vec<(String, String)>)>) {
        let resolve = |value: &str| {
            resolve_refs(value, |path| {
                model.get(path).map(|t| match self.flavor {
                    CssFlavor::Css => format!("var({})", css_var_name(t)),
                    CssFlavor::Scss => scss_var_name(t),
                })
            })
        };

        let mut regular: Vec<(String, String)> = Vec::new();
        let mut states: Vec<(&'static str, Vec<(String, String)>)> = Vec::new();

        for (prop, value) in &component.props {
            if let Some(&(_, (selector, css_prop))) =
                STATE_PROPS.iter().find(|(name, _)| *name == prop.as_str())
            {
                let resolved = resolve(value);
                match states.iter_mut().find(|(s, _)| *s == selector) {
                    Some((_, decls)) => decls.push((css_prop.to_string(), resolved)),
                    None => states.push((selector, vec![(css_prop.to_string(), resolved)])),
                }
            } else if prop == "shadow" {
                regular.push(("box-shadow".to_string(), resolve(value)));
            } else {
                regular.push((prop.clone(), resolve(value)));
            }
        }

        (regular, states)
    }
}

impl Emitter for WebEmitter {
    fn name(&self) -> &'static str {
        match self.flavor {
            CssFlavor::Css => "CSS",
            CssFlavor::Scss => "SCSS",
        }
    }

    fn emit(&self, model: &TokenModel, date: &str) -> Vec<Artifact> {
        let filename = match self.flavor {
            CssFlavor::Css => "tokens.css",
            CssFlavor::Scss => "tokens.scss",
        };
        vec![Artifact::new(filename, self.generate(model, date))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TokenDocument;
    use pretty_assertions::assert_eq;

    fn model(json: &str) -> TokenModel {
        TokenModel::build(&TokenDocument::parse(json).unwrap()).unwrap()
    }

    const MINIMAL: &str = r##"{
        "meta": {"name": "Test DS", "source": "test.dev", "version": "1.0.0", "generated": "2025-06-01"},
        "color": {"primary": {"value": "#FF0000", "type": "color"}},
        "typography": {},
        "spacing": {"4": {"value": "16px", "type": "dimension"}},
        "borderRadius": {},
        "shadow": {}
    }"##;

    #[test]
    fn test_css_minimal_document() {
        let emitter = WebEmitter::new(CssFlavor::Css, false);
        let artifacts = emitter.emit(&model(MINIMAL), "2025-06-01");
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].filename, "tokens.css");

        let expected = "\
/* Test DS
 * Source: test.dev
 * Version: 1.0.0
 * Generated: 2025-06-01
 * Format: CSS Custom Properties
 */

:root {
  /* Colors */
  --color-primary: #FF0000;

  /* Spacing */
  --space-4: 1rem;
}
";
        assert_eq!(artifacts[0].content, expected);
    }

    #[test]
    fn test_css_sections_in_canonical_order() {
        let m = model(
            r##"{
                "shadow": {"sm": {"value": "0 1 2px rgba(0, 0, 0, 0.05)", "type": "shadow"}},
                "color": {"primary": {"value": "#FF0000", "type": "color"}},
                "spacing": {"4": {"value": "16px", "type": "dimension"}},
                "borderRadius": {"full": {"value": "9999px", "type": "dimension"}}
            }"##,
        );
        let content = &WebEmitter::new(CssFlavor::Css, false).emit(&m, "d")[0].content;

        let colors = content.find("/* Colors */").unwrap();
        let spacing = content.find("/* Spacing */").unwrap();
        let radius = content.find("/* Border Radius */").unwrap();
        let shadows = content.find("/* Shadows */").unwrap();
        assert!(colors < spacing && spacing < radius && radius < shadows);

        // Pill radius sentinel is never divided into rem
        assert!(content.contains("--radius-full: 9999px;"));
    }

    #[test]
    fn test_css_typography_prefixes() {
        let m = model(
            r##"{"typography": {
                "font-family-heading": {"value": "'Space Grotesk', sans-serif", "type": "fontFamily"},
                "font-size": {"lg": {"value": "18px", "type": "dimension"}},
                "font-weight": {"bold": {"value": "700", "type": "fontWeight"}}
            }}"##,
        );
        let content = &WebEmitter::new(CssFlavor::Css, false).emit(&m, "d")[0].content;
        assert!(content.contains("--font-heading: 'Space Grotesk', sans-serif;"));
        assert!(content.contains("--font-size-lg: 1.125rem;"));
        assert!(content.contains("--font-weight-bold: 700;"));
    }

    #[test]
    fn test_css_font_imports() {
        let m = model(
            r##"{"typography": {"font-source": {
                "heading": {"value": "https://fonts.example/space-grotesk", "type": "fontSource"},
                "body": {"value": "https://fonts.example/space-grotesk", "type": "fontSource"},
                "mono": {"value": "system", "type": "fontSource"}
            }}}"##,
        );
        let content = &WebEmitter::new(CssFlavor::Css, false).emit(&m, "d")[0].content;
        let import_count = content
            .matches("@import url('https://fonts.example/space-grotesk');")
            .count();
        assert_eq!(import_count, 1);
        assert!(!content.contains("system"));
        assert!(!content.contains("--font-source"));
    }

    #[test]
    fn test_scss_variables_and_maps() {
        let emitter = WebEmitter::new(CssFlavor::Scss, false);
        let content = &emitter.emit(&model(MINIMAL), "2025-06-01")[0].content;

        assert!(content.contains("$color-primary: #FF0000;"));
        assert!(content.contains("$space-4: 1rem;"));
        assert!(content.contains("// Maps"));
        assert!(content.contains("$colors: (\n  \"color-primary\": #FF0000,\n);"));
        assert!(content.contains("$spacing: (\n  \"space-4\": 1rem,\n);"));
        // Empty sections produce no maps
        assert!(!content.contains("$radii"));
        assert!(!content.contains("$shadows"));
    }

    const WITH_COMPONENTS: &str = r##"{
        "meta": {"name": "Test DS", "source": "test.dev", "version": "1.0.0", "generated": "2025-06-01"},
        "color": {
            "primary": {"value": "#FF0000", "type": "color"},
            "primary-dark": {"value": "#AA0000", "type": "color"}
        },
        "typography": {},
        "spacing": {"4": {"value": "16px", "type": "dimension"}},
        "borderRadius": {},
        "shadow": {"md": {"value": "0 4 6px rgba(0, 0, 0, 0.1)", "type": "shadow"}},
        "components": {
            "button-primary": {
                "background": "{color.primary}",
                "padding": "{spacing.4}",
                "shadow": "{shadow.md}",
                "hover-background": "{color.primary-dark}"
            }
        }
    }"##;

    #[test]
    fn test_css_component_classes() {
        let emitter = WebEmitter::new(CssFlavor::Css, true);
        let content = &emitter.emit(&model(WITH_COMPONENTS), "d")[0].content;

        assert!(content.contains("/* Component Utility Classes */"));
        let expected_block = "\
.button-primary {
  background: var(--color-primary);
  padding: var(--space-4);
  box-shadow: var(--shadow-md);
}

.button-primary:hover {
  background: var(--color-primary-dark);
}
";
        assert!(content.contains(expected_block), "content:\n{}", content);
    }

    #[test]
    fn test_scss_component_mixins() {
        let emitter = WebEmitter::new(CssFlavor::Scss, true);
        let content = &emitter.emit(&model(WITH_COMPONENTS), "d")[0].content;

        assert!(content.contains("// Component Mixins"));
        let expected_block = "\
@mixin button-primary {
  background: $color-primary;
  padding: $space-4;
  box-shadow: $shadow-md;
  &:hover {
    background: $color-primary-dark;
  }
}
";
        assert!(content.contains(expected_block), "content:\n{}", content);
    }

    #[test]
    fn test_unresolved_reference_left_visible() {
        let m = model(
            r##"{
                "color": {"primary": {"value": "#FF0000", "type": "color"}},
                "components": {"card": {"border-color": "{color.border}"}}
            }"##,
        );
        let content = &WebEmitter::new(CssFlavor::Css, true).emit(&m, "d")[0].content;
        assert!(content.contains("border-color: {color.border};"));
    }

    #[test]
    fn test_components_flag_off_omits_classes() {
        let emitter = WebEmitter::new(CssFlavor::Css, false);
        let content = &emitter.emit(&model(WITH_COMPONENTS), "d")[0].content;
        assert!(!content.contains("Component Utility Classes"));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let m = model(WITH_COMPONENTS);
        let emitter = WebEmitter::new(CssFlavor::Scss, true);
        assert_eq!(emitter.emit(&m, "d"), emitter.emit(&m, "d"));
    }
}

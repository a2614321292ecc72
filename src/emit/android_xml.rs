//! Android XML resource output.
//!
//! Emits four artifacts: `colors.xml`, `dimens.xml`, `styles.xml`, and
//! `themes.xml`. Resource names are snake_case; colours use the
//! `#AARRGGBB` form Android expects. Theme items reference only colours
//! actually present in the model.

use crate::model::{naming, TokenModel};
use crate::types::{Colour, Section};

use super::header::xml_header;
use super::{
    font_families, font_sources, group_scalars, scalar_or, section_scalars, Artifact, Emitter,
};

/// Material 3 text appearances mapped to `(style, size token, fallback, textStyle)`.
const TEXT_STYLES: [(&str, &str, &str, &str); 8] = [
    ("TextAppearance.Heading.Large", "3xl", "30", "bold"),
    ("TextAppearance.Heading.Medium", "2xl", "24", "bold"),
    ("TextAppearance.Heading.Small", "xl", "20", "bold"),
    ("TextAppearance.Body.Large", "base", "16", "normal"),
    ("TextAppearance.Body.Medium", "sm", "14", "normal"),
    ("TextAppearance.Body.Small", "xs", "12", "normal"),
    ("TextAppearance.Label.Large", "sm", "14", "bold"),
    ("TextAppearance.Label.Medium", "xs", "12", "bold"),
];

/// Theme items grouped under banner comments, mapped to token names.
/// `android:`-namespaced items keep their prefix.
const THEME_GROUPS: [(&str, &[(&str, &str)]); 5] = [
    (
        "Primary",
        &[
            ("colorPrimary", "primary"),
            ("colorPrimaryContainer", "primary-light"),
        ],
    ),
    ("Secondary", &[("colorSecondary", "secondary")]),
    ("Tertiary", &[("colorTertiary", "accent")]),
    (
        "Background & Surface",
        &[
            ("android:colorBackground", "background"),
            ("colorSurface", "surface"),
            ("colorOnBackground", "text-primary"),
            ("colorOnSurface", "text-primary"),
            ("colorOnSurfaceVariant", "text-secondary"),
        ],
    ),
    (
        "Outline",
        &[
            ("colorOutline", "border"),
            ("colorOutlineVariant", "border-light"),
        ],
    ),
];

/// Android colour resource value for a raw hex token value.
fn xml_argb(raw: &str) -> String {
    match Colour::from_hex(raw) {
        Ok(colour) => colour.to_xml_argb(),
        Err(_) => format!("#FF{}", raw.trim_start_matches('#').to_uppercase()),
    }
}

/// The Android XML backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidXmlEmitter;

impl AndroidXmlEmitter {
    fn colors_xml(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = xml_header(model.meta(), "Android XML - Colors", date);
        lines.push("<resources>".to_string());

        for token in model.section_tokens(Section::Color) {
            lines.push(format!(
                "    <color name=\"{}\">{}</color>",
                naming::snake_case(token.name()),
                xml_argb(&token.raw_value)
            ));
        }

        lines.push("</resources>".to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    fn dimens_xml(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = xml_header(model.meta(), "Android XML - Dimensions", date);
        lines.push("<resources>".to_string());

        lines.push("    <!-- Spacing -->".to_string());
        for (name, value) in section_scalars(model, Section::Spacing) {
            lines.push(format!(
                "    <dimen name=\"space_{}\">{}dp</dimen>",
                naming::snake_case(name),
                value
            ));
        }

        lines.push(String::new());
        lines.push("    <!-- Border Radius -->".to_string());
        for (name, value) in section_scalars(model, Section::BorderRadius) {
            lines.push(format!(
                "    <dimen name=\"radius_{}\">{}dp</dimen>",
                naming::snake_case(name),
                value
            ));
        }

        lines.push(String::new());
        lines.push("    <!-- Font Sizes -->".to_string());
        for (name, value) in group_scalars(model, "font-size") {
            lines.push(format!(
                "    <dimen name=\"font_size_{}\">{}sp</dimen>",
                naming::snake_case(name),
                value
            ));
        }

        lines.push("</resources>".to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    fn styles_xml(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = xml_header(model.meta(), "Android XML - Styles", date);
        lines.push("<resources>".to_string());

        let families = font_families(model);
        let sources = font_sources(model);
        let non_system: Vec<(&str, &str)> = sources
            .iter()
            .map(|(slot, url)| (*slot, url.as_str()))
            .filter(|(_, url)| *url != "system")
            .collect();
        if !non_system.is_empty() {
            lines.push("    <!-- Font Sources -->".to_string());
            for &(slot, url) in &non_system {
                let font_name = families
                    .iter()
                    .find(|(s, _)| *s == slot)
                    .map(|(_, name)| name.as_str())
                    .unwrap_or(slot);
                lines.push(format!("    <!-- {}: {} -->", font_name, url));
                lines.push("    <!-- Download .ttf files and place in res/font/ -->".to_string());
            }
            lines.push(String::new());
        }

        let sizes = group_scalars(model, "font-size");
        for (style, size_token, fallback, text_style) in TEXT_STYLES {
            let size = scalar_or(&sizes, size_token, fallback);
            lines.push(format!(
                "    <style name=\"{}\" parent=\"TextAppearance.Material3.BodyMedium\">",
                style
            ));
            lines.push(format!(
                "        <item name=\"android:textSize\">{}sp</item>",
                size
            ));
            lines.push(format!(
                "        <item name=\"android:textStyle\">{}</item>",
                text_style
            ));
            lines.push("    </style>".to_string());
            lines.push(String::new());
        }

        lines.push(
            "    <style name=\"Widget.App.Button.Primary\" parent=\"Widget.Material3.Button\">"
                .to_string(),
        );
        lines.push("        <item name=\"backgroundTint\">@color/primary</item>".to_string());
        lines.push("        <item name=\"cornerRadius\">@dimen/radius_md</item>".to_string());
        lines.push("    </style>".to_string());
        lines.push(String::new());

        lines.push(
            "    <style name=\"Widget.App.Card\" parent=\"Widget.Material3.CardView.Elevated\">"
                .to_string(),
        );
        lines.push("        <item name=\"cardCornerRadius\">@dimen/radius_lg</item>".to_string());
        lines.push("        <item name=\"contentPadding\">@dimen/space_6</item>".to_string());
        lines.push("    </style>".to_string());

        lines.push("</resources>".to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    fn themes_xml(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = xml_header(model.meta(), "Android XML - Theme", date);
        lines.push("<resources>".to_string());
        lines.push(String::new());
        lines.push(
            "    <style name=\"Theme.App\" parent=\"Theme.Material3.Light.NoActionBar\">"
                .to_string(),
        );

        for (label, items) in THEME_GROUPS {
            let present: Vec<_> = items
                .iter()
                .filter(|(_, token)| model.contains(&format!("color.{}", token)))
                .collect();
            if present.is_empty() {
                continue;
            }
            lines.push(format!("        <!-- {} -->", label));
            for (item, token) in present {
                lines.push(format!(
                    "        <item name=\"{}\">@color/{}</item>",
                    item,
                    naming::snake_case(token)
                ));
                if *item == "colorPrimary" {
                    // Contrast colour for primary; not itself a token
                    lines.push("        <item name=\"colorOnPrimary\">#FFFFFF</item>".to_string());
                }
            }
            lines.push(String::new());
        }

        if model.contains("color.error") {
            lines.push("        <!-- Error -->".to_string());
            lines.push("        <item name=\"colorError\">@color/error</item>".to_string());
        }

        lines.push("    </style>".to_string());
        lines.push(String::new());
        lines.push("</resources>".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

impl Emitter for AndroidXmlEmitter {
    fn name(&self) -> &'static str {
        "Android XML"
    }

    fn emit(&self, model: &TokenModel, date: &str) -> Vec<Artifact> {
        vec![
            Artifact::new("colors.xml", self.colors_xml(model, date)),
            Artifact::new("dimens.xml", self.dimens_xml(model, date)),
            Artifact::new("styles.xml", self.styles_xml(model, date)),
            Artifact::new("themes.xml", self.themes_xml(model, date)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TokenDocument;

    fn model(json: &str) -> TokenModel {
        TokenModel::build(&TokenDocument::parse(json).unwrap()).unwrap()
    }

    const SAMPLE: &str = r##"{
        "meta": {"name": "Test DS", "source": "test.dev", "version": "1.0.0", "generated": "2025-06-01"},
        "color": {
            "primary": {"value": "#6C3BF4", "type": "color"},
            "text-primary": {"value": "#111827", "type": "color"},
            "error": {"value": "#DC2626", "type": "color"}
        },
        "typography": {
            "font-family-heading": {"value": "'Space Grotesk', sans-serif", "type": "fontFamily"},
            "font-size": {
                "base": {"value": "16px", "type": "dimension"},
                "3xl": {"value": "30px", "type": "dimension"}
            },
            "font-source": {
                "heading": {"value": "https://fonts.example/space-grotesk", "type": "fontSource"}
            }
        },
        "spacing": {"6": {"value": "24px", "type": "dimension"}},
        "borderRadius": {"md": {"value": "8px", "type": "dimension"}},
        "shadow": {}
    }"##;

    #[test]
    fn test_emits_four_artifacts_in_order() {
        let artifacts = AndroidXmlEmitter.emit(&model(SAMPLE), "2025-06-01");
        let names: Vec<&str> = artifacts.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["colors.xml", "dimens.xml", "styles.xml", "themes.xml"]
        );
    }

    #[test]
    fn test_colors_xml() {
        let artifacts = AndroidXmlEmitter.emit(&model(SAMPLE), "d");
        let colors = &artifacts[0].content;
        assert!(colors.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(colors.contains("<color name=\"primary\">#FF6C3BF4</color>"));
        assert!(colors.contains("<color name=\"text_primary\">#FF111827</color>"));
    }

    #[test]
    fn test_dimens_xml() {
        let artifacts = AndroidXmlEmitter.emit(&model(SAMPLE), "d");
        let dimens = &artifacts[1].content;
        assert!(dimens.contains("<dimen name=\"space_6\">24dp</dimen>"));
        assert!(dimens.contains("<dimen name=\"radius_md\">8dp</dimen>"));
        assert!(dimens.contains("<dimen name=\"font_size_3xl\">30sp</dimen>"));
    }

    #[test]
    fn test_styles_xml_sources_and_text_styles() {
        let artifacts = AndroidXmlEmitter.emit(&model(SAMPLE), "d");
        let styles = &artifacts[2].content;
        assert!(styles.contains("<!-- Space Grotesk: https://fonts.example/space-grotesk -->"));
        assert!(styles.contains("<style name=\"TextAppearance.Heading.Large\""));
        assert!(styles.contains("<item name=\"android:textSize\">30sp</item>"));
        // base size present, xl absent so fallback 20 applies
        assert!(styles.contains("<item name=\"android:textSize\">20sp</item>"));
        assert!(styles.contains("Widget.App.Button.Primary"));
    }

    #[test]
    fn test_themes_xml_only_present_colors() {
        let artifacts = AndroidXmlEmitter.emit(&model(SAMPLE), "d");
        let themes = &artifacts[3].content;
        assert!(themes.contains("<item name=\"colorPrimary\">@color/primary</item>"));
        assert!(themes.contains("<item name=\"colorOnPrimary\">#FFFFFF</item>"));
        assert!(themes.contains("<item name=\"colorOnSurface\">@color/text_primary</item>"));
        assert!(themes.contains("<item name=\"colorError\">@color/error</item>"));
        assert!(!themes.contains("colorSecondary"));
        assert!(!themes.contains("colorOutline"));
    }

    #[test]
    fn test_no_font_sources_no_banner() {
        let m = model(r##"{"color": {"primary": {"value": "#000000", "type": "color"}}}"##);
        let artifacts = AndroidXmlEmitter.emit(&m, "d");
        assert!(!artifacts[2].content.contains("<!-- Font Sources -->"));
    }
}

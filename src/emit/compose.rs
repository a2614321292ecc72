//! Jetpack Compose output: Kotlin theme files.
//!
//! Emits five artifacts: `Color.kt`, `Type.kt`, `Shape.kt`, `Theme.kt`,
//! and `Dimens.kt`. Material 3 mappings (type scale, shapes, colour
//! scheme) use well-known token names with fixed fallbacks so a sparse
//! document still yields a compilable theme.

use crate::model::{naming, TokenModel};
use crate::types::{Colour, Section};

use super::header::doc_comment_header;
use super::{
    font_families, font_sources, group_scalars, scalar_or, section_scalars, Artifact, Emitter,
};

const PACKAGE: &str = "package com.example.theme";

/// Material 3 text styles mapped to `(style, family slot, size token, fallback, weight)`.
const TYPE_STYLES: [(&str, &str, &str, &str, &str); 15] = [
    ("displayLarge", "heading", "4xl", "36", "FontWeight.Bold"),
    ("displayMedium", "heading", "3xl", "30", "FontWeight.Bold"),
    ("displaySmall", "heading", "2xl", "24", "FontWeight.Bold"),
    ("headlineLarge", "heading", "2xl", "24", "FontWeight.SemiBold"),
    ("headlineMedium", "heading", "xl", "20", "FontWeight.SemiBold"),
    ("headlineSmall", "heading", "lg", "18", "FontWeight.SemiBold"),
    ("titleLarge", "heading", "lg", "18", "FontWeight.Medium"),
    ("titleMedium", "body", "base", "16", "FontWeight.Medium"),
    ("titleSmall", "body", "sm", "14", "FontWeight.Medium"),
    ("bodyLarge", "body", "base", "16", "FontWeight.Normal"),
    ("bodyMedium", "body", "sm", "14", "FontWeight.Normal"),
    ("bodySmall", "body", "xs", "12", "FontWeight.Normal"),
    ("labelLarge", "body", "sm", "14", "FontWeight.Medium"),
    ("labelMedium", "body", "xs", "12", "FontWeight.Medium"),
    ("labelSmall", "body", "", "11", "FontWeight.Medium"),
];

/// Material 3 colour scheme slots mapped to token names.
const SCHEME_MAPPING: [(&str, &str); 12] = [
    ("primary", "primary"),
    ("primaryContainer", "primary-light"),
    ("secondary", "secondary"),
    ("tertiary", "accent"),
    ("background", "background"),
    ("surface", "surface"),
    ("onBackground", "text-primary"),
    ("onSurface", "text-primary"),
    ("onSurfaceVariant", "text-secondary"),
    ("outline", "border"),
    ("outlineVariant", "border-light"),
    ("error", "error"),
];

/// Compose colour literal for a raw hex token value.
fn argb_literal(raw: &str) -> String {
    match Colour::from_hex(raw) {
        Ok(colour) => colour.to_argb_literal(),
        // Emission is tolerant at render time: keep the digits visible
        Err(_) => format!("0xFF{}", raw.trim_start_matches('#').to_uppercase()),
    }
}

/// Kotlin identifier for a spacing key: `4` → `space4`, `xs` → `spaceXs`.
fn spacing_ident(key: &str) -> String {
    format!(
        "space{}",
        naming::capitalize_first(&naming::camel_case(key))
    )
}

fn prelude(model: &TokenModel, target: &str, date: &str, imports: &[&str]) -> Vec<String> {
    let mut lines = doc_comment_header(model.meta(), target, date);
    lines.push(String::new());
    lines.push(PACKAGE.to_string());
    lines.push(String::new());
    for import in imports {
        lines.push(import.to_string());
    }
    lines.push(String::new());
    lines
}

/// The Jetpack Compose backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposeEmitter;

impl ComposeEmitter {
    fn color_kt(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = prelude(
            model,
            "Jetpack Compose - Colors",
            date,
            &["import androidx.compose.ui.graphics.Color"],
        );

        for token in model.section_tokens(Section::Color) {
            lines.push(format!(
                "val {} = Color({})",
                naming::pascal_case(token.name()),
                argb_literal(&token.raw_value)
            ));
        }

        lines.push(String::new());
        lines.join("\n")
    }

    fn type_kt(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = prelude(
            model,
            "Jetpack Compose - Typography",
            date,
            &[
                "import androidx.compose.material3.Typography",
                "import androidx.compose.ui.text.TextStyle",
                "import androidx.compose.ui.text.font.Font",
                "import androidx.compose.ui.text.font.FontFamily",
                "import androidx.compose.ui.text.font.FontWeight",
                "import androidx.compose.ui.unit.sp",
            ],
        );

        let families = font_families(model);
        let sources = font_sources(model);
        let sizes = group_scalars(model, "font-size");

        for (slot, font_name) in &families {
            let pascal = naming::capitalize_first(slot);
            let source = sources
                .iter()
                .find(|(s, _)| s == slot)
                .map(|(_, url)| url.as_str());
            match source {
                Some("system") => lines.push(format!(
                    "val {}FontFamily = FontFamily.Default // System font, no setup needed",
                    pascal
                )),
                Some(url) => {
                    let font_res = font_name.to_lowercase().replace(' ', "_");
                    lines.push(format!("// Source: {}", url));
                    lines.push(format!(
                        "// Download font files and place in res/font/ (e.g., {}_regular.ttf)",
                        font_res
                    ));
                    lines.push("// Then replace FontFamily.Default with:".to_string());
                    lines.push(format!(
                        "//   FontFamily(Font(R.font.{}_regular, FontWeight.Normal), ...)",
                        font_res
                    ));
                    lines.push(format!("val {}FontFamily = FontFamily.Default", pascal));
                }
                None => lines.push(format!(
                    "val {}FontFamily = FontFamily.Default // Replace with actual font resource",
                    pascal
                )),
            }
        }
        lines.push(String::new());

        let has_slot = |slot: &str| families.iter().any(|(s, _)| *s == slot);
        let family_ref = |slot: &str| -> String {
            if has_slot(slot) {
                format!("{}FontFamily", naming::capitalize_first(slot))
            } else {
                "FontFamily.Default".to_string()
            }
        };

        lines.push("val AppTypography = Typography(".to_string());
        for (i, (style, slot, size_token, fallback, weight)) in TYPE_STYLES.iter().enumerate() {
            let size = scalar_or(&sizes, size_token, fallback);
            let comma = if i < TYPE_STYLES.len() - 1 { "," } else { "" };
            lines.push(format!("    {} = TextStyle(", style));
            lines.push(format!("        fontFamily = {},", family_ref(slot)));
            lines.push(format!("        fontWeight = {},", weight));
            lines.push(format!("        fontSize = {}.sp", size));
            lines.push(format!("    ){}", comma));
        }
        lines.push(")".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    fn shape_kt(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = prelude(
            model,
            "Jetpack Compose - Shapes",
            date,
            &[
                "import androidx.compose.foundation.shape.RoundedCornerShape",
                "import androidx.compose.material3.Shapes",
                "import androidx.compose.ui.unit.dp",
            ],
        );

        let radii = section_scalars(model, Section::BorderRadius);
        for (name, value) in &radii {
            lines.push(format!(
                "val Radius{} = RoundedCornerShape({}.dp)",
                naming::pascal_case(name),
                value
            ));
        }
        lines.push(String::new());

        lines.push("val AppShapes = Shapes(".to_string());
        lines.push(format!(
            "    extraSmall = RoundedCornerShape({}.dp),",
            scalar_or(&radii, "sm", "4")
        ));
        lines.push(format!(
            "    small = RoundedCornerShape({}.dp),",
            scalar_or(&radii, "sm", "4")
        ));
        lines.push(format!(
            "    medium = RoundedCornerShape({}.dp),",
            scalar_or(&radii, "md", "8")
        ));
        lines.push(format!(
            "    large = RoundedCornerShape({}.dp),",
            scalar_or(&radii, "lg", "12")
        ));
        lines.push(format!(
            "    extraLarge = RoundedCornerShape({}.dp)",
            scalar_or(&radii, "xl", "16")
        ));
        lines.push(")".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    fn theme_kt(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = prelude(
            model,
            "Jetpack Compose - Theme",
            date,
            &[
                "import androidx.compose.material3.MaterialTheme",
                "import androidx.compose.material3.lightColorScheme",
                "import androidx.compose.runtime.Composable",
            ],
        );

        lines.push("private val LightColorScheme = lightColorScheme(".to_string());
        let entries: Vec<String> = SCHEME_MAPPING
            .iter()
            .filter(|(_, token)| model.contains(&format!("color.{}", token)))
            .map(|(m3, token)| format!("    {} = {}", m3, naming::pascal_case(token)))
            .collect();
        for (i, entry) in entries.iter().enumerate() {
            let comma = if i < entries.len() - 1 { "," } else { "" };
            lines.push(format!("{}{}", entry, comma));
        }
        lines.push(")".to_string());
        lines.push(String::new());

        lines.push("@Composable".to_string());
        lines.push("fun AppTheme(content: @Composable () -> Unit) {".to_string());
        lines.push("    MaterialTheme(".to_string());
        lines.push("        colorScheme = LightColorScheme,".to_string());
        lines.push("        typography = AppTypography,".to_string());
        lines.push("        shapes = AppShapes,".to_string());
        lines.push("        content = content".to_string());
        lines.push("    )".to_string());
        lines.push("}".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    fn dimens_kt(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = prelude(
            model,
            "Jetpack Compose - Dimensions",
            date,
            &["import androidx.compose.ui.unit.dp"],
        );

        lines.push("object Dimens {".to_string());
        lines.push("    // Spacing".to_string());
        for (name, value) in section_scalars(model, Section::Spacing) {
            lines.push(format!("    val {} = {}.dp", spacing_ident(name), value));
        }
        lines.push(String::new());
        lines.push("    // Border Radius".to_string());
        for (name, value) in section_scalars(model, Section::BorderRadius) {
            lines.push(format!(
                "    val radius{} = {}.dp",
                naming::pascal_case(name),
                value
            ));
        }
        lines.push("}".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

impl Emitter for ComposeEmitter {
    fn name(&self) -> &'static str {
        "Compose"
    }

    fn emit(&self, model: &TokenModel, date: &str) -> Vec<Artifact> {
        vec![
            Artifact::new("Color.kt", self.color_kt(model, date)),
            Artifact::new("Type.kt", self.type_kt(model, date)),
            Artifact::new("Shape.kt", self.shape_kt(model, date)),
            Artifact::new("Theme.kt", self.theme_kt(model, date)),
            Artifact::new("Dimens.kt", self.dimens_kt(model, date)),
        ]
    }
}

//! UIKit output: a single `Theme.swift`.
//!
//! Everything hangs off one `Theme` namespace enum, with a `UIColor` hex
//! extension and font convenience methods that fall back to the system
//! font when the custom family is not installed.

use crate::model::{naming, TokenModel};
use crate::types::Section;

use super::header::swift_header;
use super::{font_families, font_sources, group_scalars, section_scalars, Artifact, Emitter};

/// Map a numeric weight to a `UIFont.Weight` case.
fn uifont_weight(value: &str) -> &'static str {
    match value {
        "400" => ".regular",
        "500" => ".medium",
        "600" => ".semibold",
        "700" => ".bold",
        _ => ".regular",
    }
}

fn const_suffix(name: &str) -> String {
    naming::capitalize_first(&naming::camel_case(name))
}

/// The UIKit backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiKitEmitter;

impl UiKitEmitter {
    fn generate(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = swift_header(model.meta(), "UIKit", date);
        lines.push(String::new());
        lines.push("import UIKit".to_string());
        lines.push(String::new());

        self.push_hex_extension(&mut lines);

        lines.push("// MARK: - Theme".to_string());
        lines.push(String::new());
        lines.push("enum Theme {".to_string());
        lines.push(String::new());

        self.push_colors(model, &mut lines);
        self.push_fonts(model, &mut lines);
        self.push_font_registration(model, &mut lines);
        self.push_spacing(model, &mut lines);
        self.push_radius(model, &mut lines);

        lines.push("}".to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    fn push_hex_extension(&self, lines: &mut Vec<String>) {
        lines.push("// MARK: - UIColor Hex Extension".to_string());
        lines.push(String::new());
        lines.push("extension UIColor {".to_string());
        lines.push("    convenience init(hex: String) {".to_string());
        lines.push(
            "        let hex = hex.trimmingCharacters(in: CharacterSet.alphanumerics.inverted)"
                .to_string(),
        );
        lines.push("        var int: UInt64 = 0".to_string());
        lines.push("        Scanner(string: hex).scanHexInt64(&int)".to_string());
        lines.push("        let r = CGFloat((int >> 16) & 0xFF) / 255.0".to_string());
        lines.push("        let g = CGFloat((int >> 8) & 0xFF) / 255.0".to_string());
        lines.push("        let b = CGFloat(int & 0xFF) / 255.0".to_string());
        lines.push("        self.init(red: r, green: g, blue: b, alpha: 1.0)".to_string());
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
    }

    fn push_colors(&self, model: &TokenModel, lines: &mut Vec<String>) {
        lines.push("    // MARK: Colors".to_string());
        lines.push(String::new());
        lines.push("    enum Colors {".to_string());
        for token in model.section_tokens(Section::Color) {
            lines.push(format!(
                "        static let {} = UIColor(hex: \"{}\")",
                naming::camel_case(token.name()),
                token.raw_value
            ));
        }
        lines.push("    }".to_string());
        lines.push(String::new());
    }

    fn push_fonts(&self, model: &TokenModel, lines: &mut Vec<String>) {
        let families = font_families(model);
        let sizes = group_scalars(model, "font-size");
        let weights = group_scalars(model, "font-weight");
        let line_heights = group_scalars(model, "line-height");

        lines.push("    // MARK: Fonts".to_string());
        lines.push(String::new());
        lines.push("    enum Fonts {".to_string());
        for (slot, font_name) in &families {
            lines.push(format!(
                "        static let fontFamily{} = \"{}\"",
                naming::capitalize_first(slot),
                font_name
            ));
        }
        lines.push(String::new());
        for (name, value) in &sizes {
            lines.push(format!(
                "        static let size{}: CGFloat = {}",
                const_suffix(name),
                value
            ));
        }
        lines.push(String::new());
        for (name, value) in &weights {
            lines.push(format!(
                "        static let weight{}: UIFont.Weight = {}",
                const_suffix(name),
                uifont_weight(value)
            ));
        }
        lines.push(String::new());
        for (name, value) in &line_heights {
            lines.push(format!(
                "        static let lineHeight{}: CGFloat = {}",
                const_suffix(name),
                value
            ));
        }
        lines.push(String::new());
        for (slot, font_name) in &families {
            lines.push(format!(
                "        static func {}(_ size: CGFloat, weight: UIFont.Weight = .regular) -> UIFont {{",
                slot
            ));
            lines.push(format!(
                "            if let font = UIFont(name: \"{}\", size: size) {{",
                font_name
            ));
            lines.push("                return font".to_string());
            lines.push("            }".to_string());
            lines.push(
                "            return UIFont.systemFont(ofSize: size, weight: weight)".to_string(),
            );
            lines.push("        }".to_string());
        }
        lines.push("    }".to_string());
        lines.push(String::new());
    }

    fn push_font_registration(&self, model: &TokenModel, lines: &mut Vec<String>) {
        let families = font_families(model);
        let sources = font_sources(model);
        let non_system: Vec<(&str, &str)> = sources
            .iter()
            .map(|(slot, url)| (*slot, url.as_str()))
            .filter(|(_, url)| *url != "system")
            .collect();
        if non_system.is_empty() {
            return;
        }

        lines.push("    // MARK: Font Registration".to_string());
        lines.push(String::new());
        lines.push(
            "    // To use custom fonts, download the font files and add them to your Xcode project."
                .to_string(),
        );
        lines.push(
            "    // Register each font file in Info.plist under the \"UIAppFonts\" key."
                .to_string(),
        );
        lines.push("    //".to_string());
        for &(slot, url) in &non_system {
            let family_name = families
                .iter()
                .find(|(s, _)| *s == slot)
                .map(|(_, name)| name.as_str())
                .unwrap_or(slot);
            lines.push(format!("    // Font: {}", family_name));
            lines.push(format!("    //   Source: {}", url));
            lines.push(format!(
                "    //   Add to Info.plist UIAppFonts: \"{}-Regular.ttf\", \"{}-Bold.ttf\", etc.",
                family_name, family_name
            ));
        }
        let system: Vec<&str> = sources
            .iter()
            .filter(|(_, url)| url == "system")
            .map(|(slot, _)| *slot)
            .collect();
        if !system.is_empty() {
            lines.push("    //".to_string());
            for slot in system {
                lines.push(format!(
                    "    // Font: {} - system font, no registration needed",
                    slot
                ));
            }
        }
        lines.push(String::new());
    }

    fn push_spacing(&self, model: &TokenModel, lines: &mut Vec<String>) {
        lines.push("    // MARK: Spacing".to_string());
        lines.push(String::new());
        lines.push("    enum Spacing {".to_string());
        for (name, value) in section_scalars(model, Section::Spacing) {
            lines.push(format!(
                "        static let space{}: CGFloat = {}",
                const_suffix(name),
                value
            ));
        }
        lines.push("    }".to_string());
        lines.push(String::new());
    }

    fn push_radius(&self, model: &TokenModel, lines: &mut Vec<String>) {
        lines.push("    // MARK: Radius".to_string());
        lines.push(String::new());
        lines.push("    enum Radius {".to_string());
        for (name, value) in section_scalars(model, Section::BorderRadius) {
            lines.push(format!(
                "        static let {}: CGFloat = {}",
                naming::camel_case(name),
                value
            ));
        }
        lines.push("    }".to_string());
    }
}

impl Emitter for UiKitEmitter {
    fn name(&self) -> &'static str {
        "UIKit"
    }

    fn emit(&self, model: &TokenModel, date: &str) -> Vec<Artifact> {
        vec![Artifact::new("Theme.swift", self.generate(model, date))]
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
        "color": {"text-primary": {"value": "#111827", "type": "color"}},
        "typography": {
            "font-family-heading": {"value": "'Space Grotesk', sans-serif", "type": "fontFamily"},
            "font-size": {"base": {"value": "16px", "type": "dimension"}},
            "font-weight": {"bold": {"value": "700", "type": "fontWeight"}}
        },
        "spacing": {"2": {"value": "8px", "type": "dimension"}},
        "borderRadius": {"lg": {"value": "12px", "type": "dimension"}},
        "shadow": {}
    }"##;

    #[test]
    fn test_single_artifact() {
        let artifacts = UiKitEmitter.emit(&model(SAMPLE), "2025-06-01");
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].filename, "Theme.swift");
    }

    #[test]
    fn test_theme_namespace() {
        let content = &UiKitEmitter.emit(&model(SAMPLE), "d")[0].content;
        assert!(content.contains("import UIKit"));
        assert!(content.contains("enum Theme {"));
        assert!(content.contains("        static let textPrimary = UIColor(hex: \"#111827\")"));
        assert!(content.contains("        static let sizeBase: CGFloat = 16"));
        assert!(content.contains("        static let weightBold: UIFont.Weight = .bold"));
        assert!(content.contains("        static let space2: CGFloat = 8"));
        assert!(content.contains("        static let lg: CGFloat = 12"));
    }

    #[test]
    fn test_font_fallback_method() {
        let content = &UiKitEmitter.emit(&model(SAMPLE), "d")[0].content;
        assert!(content.contains(
            "        static func heading(_ size: CGFloat, weight: UIFont.Weight = .regular) -> UIFont {"
        ));
        assert!(content.contains("UIFont(name: \"Space Grotesk\", size: size)"));
        assert!(content.contains("return UIFont.systemFont(ofSize: size, weight: weight)"));
    }

    #[test]
    fn test_no_registration_without_sources() {
        let content = &UiKitEmitter.emit(&model(SAMPLE), "d")[0].content;
        assert!(!content.contains("Font Registration"));
    }
}

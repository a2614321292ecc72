//! SwiftUI output: a single `DesignTokens.swift`.
//!
//! Colours go through a hex `Color` extension so the authored digits stay
//! readable in the generated source. Shadows decompose into a `DSShadow`
//! value plus a view modifier.

use crate::model::{naming, TokenModel};
use crate::types::Section;

use super::header::swift_header;
use super::{
    font_families, font_sources, group_scalars, parsed_shadows, section_scalars, Artifact, Emitter,
};

/// Map a numeric weight to a `Font.Weight` case.
fn swift_weight(value: &str) -> &'static str {
    match value {
        "400" => ".regular",
        "500" => ".medium",
        "600" => ".semibold",
        "700" => ".bold",
        _ => ".regular",
    }
}

/// `fontSize` / `lineHeight` style constant suffix: `2xl` → `2xl`, `base` → `Base`.
fn const_suffix(name: &str) -> String {
    naming::capitalize_first(&naming::camel_case(name))
}

/// The SwiftUI backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftUiEmitter;

impl SwiftUiEmitter {
    fn generate(&self, model: &TokenModel, date: &str) -> String {
        let mut lines = swift_header(model.meta(), "SwiftUI", date);
        lines.push(String::new());
        lines.push("import SwiftUI".to_string());
        lines.push(String::new());

        self.push_hex_extension(&mut lines);
        self.push_colors(model, &mut lines);
        self.push_typography(model, &mut lines);
        self.push_font_registration(model, &mut lines);
        self.push_spacing(model, &mut lines);
        self.push_radius(model, &mut lines);
        self.push_shadows(model, &mut lines);

        lines.join("\n")
    }

    fn push_hex_extension(&self, lines: &mut Vec<String>) {
        lines.push("// MARK: - Color Hex Extension".to_string());
        lines.push(String::new());
        lines.push("extension Color {".to_string());
        lines.push("    init(hex: String) {".to_string());
        lines.push(
            "        let hex = hex.trimmingCharacters(in: CharacterSet.alphanumerics.inverted)"
                .to_string(),
        );
        lines.push("        var int: UInt64 = 0".to_string());
        lines.push("        Scanner(string: hex).scanHexInt64(&int)".to_string());
        lines.push("        let r = Double((int >> 16) & 0xFF) / 255.0".to_string());
        lines.push("        let g = Double((int >> 8) & 0xFF) / 255.0".to_string());
        lines.push("        let b = Double(int & 0xFF) / 255.0".to_string());
        lines.push("        self.init(red: r, green: g, blue: b)".to_string());
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
    }

    fn push_colors(&self, model: &TokenModel, lines: &mut Vec<String>) {
        lines.push("// MARK: - Colors".to_string());
        lines.push(String::new());
        lines.push("struct DSColors {".to_string());
        for token in model.section_tokens(Section::Color) {
            lines.push(format!(
                "    static let {} = Color(hex: \"{}\")",
                naming::camel_case(token.name()),
                token.raw_value
            ));
        }
        lines.push("}".to_string());
        lines.push(String::new());
    }

    fn push_typography(&self, model: &TokenModel, lines: &mut Vec<String>) {
        let families = font_families(model);
        let sizes = group_scalars(model, "font-size");
        let weights = group_scalars(model, "font-weight");
        let line_heights = group_scalars(model, "line-height");

        lines.push("// MARK: - Typography".to_string());
        lines.push(String::new());
        lines.push("struct DSTypography {".to_string());
        for (slot, font_name) in &families {
            lines.push(format!(
                "    static let fontFamily{} = \"{}\"",
                naming::capitalize_first(slot),
                font_name
            ));
        }
        lines.push(String::new());
        for (name, value) in &sizes {
            lines.push(format!(
                "    static let fontSize{}: CGFloat = {}",
                const_suffix(name),
                value
            ));
        }
        lines.push(String::new());
        for (name, value) in &weights {
            lines.push(format!(
                "    static let fontWeight{}: Font.Weight = {}",
                const_suffix(name),
                swift_weight(value)
            ));
        }
        lines.push(String::new());
        for (name, value) in &line_heights {
            lines.push(format!(
                "    static let lineHeight{}: CGFloat = {}",
                const_suffix(name),
                value
            ));
        }
        lines.push(String::new());
        for (slot, font_name) in &families {
            lines.push(format!(
                "    static func {}(_ size: CGFloat, weight: Font.Weight = .regular) -> Font {{",
                slot
            ));
            lines.push(format!(
                "        .custom(\"{}\", size: size).weight(weight)",
                font_name
            ));
            lines.push("    }".to_string());
        }
        lines.push("}".to_string());
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

        lines.push("// MARK: - Font Registration".to_string());
        lines.push(String::new());
        lines.push(
            "// To use custom fonts, download the font files and add them to your Xcode project."
                .to_string(),
        );
        lines.push(
            "// Register each font file in Info.plist under the \"UIAppFonts\" key.".to_string(),
        );
        lines.push("//".to_string());
        for &(slot, url) in &non_system {
            let family_name = families
                .iter()
                .find(|(s, _)| *s == slot)
                .map(|(_, name)| name.as_str())
                .unwrap_or(slot);
            lines.push(format!("// Font: {}", family_name));
            lines.push(format!("//   Source: {}", url));
            lines.push(format!(
                "//   Add to Info.plist UIAppFonts: \"{}-Regular.ttf\", \"{}-Bold.ttf\", etc.",
                family_name, family_name
            ));
        }
        let system: Vec<&str> = sources
            .iter()
            .filter(|(_, url)| url == "system")
            .map(|(slot, _)| *slot)
            .collect();
        if !system.is_empty() {
            lines.push("//".to_string());
            for slot in system {
                lines.push(format!(
                    "// Font: {} - system font, no registration needed",
                    slot
                ));
            }
        }
        lines.push(String::new());
    }

    fn push_spacing(&self, model: &TokenModel, lines: &mut Vec<String>) {
        lines.push("// MARK: - Spacing".to_string());
        lines.push(String::new());
        lines.push("enum DSSpacing {".to_string());
        for (name, value) in section_scalars(model, Section::Spacing) {
            lines.push(format!(
                "    static let space{}: CGFloat = {}",
                const_suffix(name),
                value
            ));
        }
        lines.push("}".to_string());
        lines.push(String::new());
    }

    fn push_radius(&self, model: &TokenModel, lines: &mut Vec<String>) {
        lines.push("// MARK: - Border Radius".to_string());
        lines.push(String::new());
        lines.push("enum DSRadius {".to_string());
        for (name, value) in section_scalars(model, Section::BorderRadius) {
            lines.push(format!(
                "    static let {}: CGFloat = {}",
                naming::camel_case(name),
                value
            ));
        }
        lines.push("}".to_string());
        lines.push(String::new());
    }

    fn push_shadows(&self, model: &TokenModel, lines: &mut Vec<String>) {
        lines.push("// MARK: - Shadows".to_string());
        lines.push(String::new());
        lines.push("struct DSShadow {".to_string());
        lines.push("    let color: Color".to_string());
        lines.push("    let radius: CGFloat".to_string());
        lines.push("    let x: CGFloat".to_string());
        lines.push("    let y: CGFloat".to_string());
        lines.push(String::new());
        for (token, shadow) in parsed_shadows(model) {
            let c = &shadow.colour;
            lines.push(format!(
                "    static let {} = DSShadow(",
                naming::camel_case(token.name())
            ));
            lines.push(format!(
                "        color: Color(.sRGB, red: {}/255, green: {}/255, blue: {}/255, opacity: {}),",
                c.r, c.g, c.b, c.alpha
            ));
            lines.push(format!("        radius: {},", shadow.blur));
            lines.push(format!("        x: {},", shadow.x));
            lines.push(format!("        y: {}", shadow.y));
            lines.push("    )".to_string());
        }
        lines.push("}".to_string());
        lines.push(String::new());

        lines.push("// MARK: - Shadow ViewModifier".to_string());
        lines.push(String::new());
        lines.push("struct DSShadowModifier: ViewModifier {".to_string());
        lines.push("    let shadow: DSShadow".to_string());
        lines.push(String::new());
        lines.push("    func body(content: Content) -> some View {".to_string());
        lines.push(
            "        content.shadow(color: shadow.color, radius: shadow.radius, x: shadow.x, y: shadow.y)"
                .to_string(),
        );
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push("extension View {".to_string());
        lines.push("    func dsShadow(_ shadow: DSShadow) -> some View {".to_string());
        lines.push("        modifier(DSShadowModifier(shadow: shadow))".to_string());
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
    }
}

impl Emitter for SwiftUiEmitter {
    fn name(&self) -> &'static str {
        "SwiftUI"
    }

    fn emit(&self, model: &TokenModel, date: &str) -> Vec<Artifact> {
        vec![Artifact::new(
            "DesignTokens.swift",
            self.generate(model, date),
        )]
    }
}

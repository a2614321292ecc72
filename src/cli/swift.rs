//! Swift command implementation.
//!
//! Generates a SwiftUI token file (the default) or a UIKit theme file,
//! selected once here as an explicit target enum.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::emit::{Emitter, SwiftUiEmitter, UiKitEmitter};
use crate::error::Result;
use crate::output::Printer;

use super::{emit_to_dir_or_stdout, load_for_generation, EXIT_VALIDATION};

/// Swift output variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SwiftTarget {
    /// SwiftUI design token file
    #[default]
    Swiftui,
    /// UIKit theme file
    Uikit,
}

/// Generate SwiftUI or UIKit theme files
#[derive(Args, Debug)]
pub struct SwiftArgs {
    /// Token JSON file
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output variant
    #[arg(long, value_enum, default_value = "swiftui")]
    pub target: SwiftTarget,

    /// Output directory (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SwiftArgs) -> Result<u8> {
    let printer = Printer::new();

    let Some(model) = load_for_generation(&args.file, &printer)? else {
        return Ok(EXIT_VALIDATION);
    };

    let emitter: Box<dyn Emitter> = match args.target {
        SwiftTarget::Swiftui => Box::new(SwiftUiEmitter),
        SwiftTarget::Uikit => Box::new(UiKitEmitter),
    };

    emit_to_dir_or_stdout(emitter.as_ref(), &model, args.output.as_deref(), &printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID: &str = r##"{
        "meta": {"name": "T", "source": "s", "version": "1", "generated": "g"},
        "color": {"primary": {"value": "#6C3BF4", "type": "color"}},
        "typography": {},
        "spacing": {},
        "borderRadius": {},
        "shadow": {}
    }"##;

    #[test]
    fn test_run_swiftui_writes_design_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        let out = dir.path().join("swift");
        fs::write(&input, VALID).unwrap();

        let code = run(SwiftArgs {
            file: input,
            target: SwiftTarget::Swiftui,
            output: Some(out.clone()),
        })
        .unwrap();

        assert_eq!(code, 0);
        let content = fs::read_to_string(out.join("DesignTokens.swift")).unwrap();
        assert!(content.contains("static let primary = Color(hex: \"#6C3BF4\")"));
    }

    #[test]
    fn test_run_uikit_writes_theme() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        let out = dir.path().join("swift");
        fs::write(&input, VALID).unwrap();

        run(SwiftArgs {
            file: input,
            target: SwiftTarget::Uikit,
            output: Some(out.clone()),
        })
        .unwrap();

        let content = fs::read_to_string(out.join("Theme.swift")).unwrap();
        assert!(content.contains("enum Theme {"));
    }

    #[test]
    fn test_run_blocks_on_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        fs::write(&input, "not json").unwrap();

        assert!(run(SwiftArgs {
            file: input,
            target: SwiftTarget::Swiftui,
            output: None,
        })
        .is_err());
    }
}

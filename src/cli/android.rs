//! Android command implementation.
//!
//! Generates Jetpack Compose theme files (the default) or Android XML
//! resources, selected once here as an explicit target enum.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::emit::{AndroidXmlEmitter, ComposeEmitter, Emitter};
use crate::error::Result;
use crate::output::Printer;

use super::{emit_to_dir_or_stdout, load_for_generation, EXIT_VALIDATION};

/// Android output variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AndroidTarget {
    /// Jetpack Compose Kotlin theme files
    #[default]
    Compose,
    /// Android XML resource files
    Xml,
}

/// Generate Jetpack Compose theme files or Android XML resources
#[derive(Args, Debug)]
pub struct AndroidArgs {
    /// Token JSON file
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output variant
    #[arg(long, value_enum, default_value = "compose")]
    pub target: AndroidTarget,

    /// Output directory (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: AndroidArgs) -> Result<u8> {
    let printer = Printer::new();

    let Some(model) = load_for_generation(&args.file, &printer)? else {
        return Ok(EXIT_VALIDATION);
    };

    let emitter: Box<dyn Emitter> = match args.target {
        AndroidTarget::Compose => Box::new(ComposeEmitter),
        AndroidTarget::Xml => Box::new(AndroidXmlEmitter),
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
        "spacing": {"4": {"value": "16px", "type": "dimension"}},
        "borderRadius": {"md": {"value": "8px", "type": "dimension"}},
        "shadow": {}
    }"##;

    #[test]
    fn test_run_compose_writes_five_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        let out = dir.path().join("theme");
        fs::write(&input, VALID).unwrap();

        let code = run(AndroidArgs {
            file: input,
            target: AndroidTarget::Compose,
            output: Some(out.clone()),
        })
        .unwrap();

        assert_eq!(code, 0);
        for name in ["Color.kt", "Type.kt", "Shape.kt", "Theme.kt", "Dimens.kt"] {
            assert!(out.join(name).exists(), "missing {}", name);
        }
        let color_kt = fs::read_to_string(out.join("Color.kt")).unwrap();
        assert!(color_kt.contains("val Primary = Color(0xFF6C3BF4)"));
    }

    #[test]
    fn test_run_xml_writes_four_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        let out = dir.path().join("res");
        fs::write(&input, VALID).unwrap();

        run(AndroidArgs {
            file: input,
            target: AndroidTarget::Xml,
            output: Some(out.clone()),
        })
        .unwrap();

        for name in ["colors.xml", "dimens.xml", "styles.xml", "themes.xml"] {
            assert!(out.join(name).exists(), "missing {}", name);
        }
    }

    #[test]
    fn test_run_blocks_on_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        let out = dir.path().join("theme");
        fs::write(&input, "{}").unwrap();

        let code = run(AndroidArgs {
            file: input,
            target: AndroidTarget::Compose,
            output: Some(out.clone()),
        })
        .unwrap();

        assert_eq!(code, EXIT_VALIDATION);
        assert!(!out.exists());
    }
}

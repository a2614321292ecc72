//! Command-line interface for dstok.
//!
//! Variant selection (css/scss, compose/xml, swiftui/uikit) is resolved
//! once here, at the boundary, into explicit enums passed down to the
//! emitters. Exit codes follow one convention across subcommands:
//! 0 success, 1 schema validation failure, 2 I/O or parse error.

pub mod android;
pub mod completions;
pub mod swift;
pub mod validate;
pub mod web;

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::emit::{Artifact, Emitter};
use crate::error::{DstokError, Result};
use crate::model::TokenModel;
use crate::output::{display_path, Printer};
use crate::parser::TokenDocument;
use crate::validation::{format_report, validate_document};

/// dstok - Design token code generator
#[derive(Parser, Debug)]
#[command(name = "dstok")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a token file against the schema without generating
    Validate(validate::ValidateArgs),

    /// Generate CSS custom properties or SCSS variables
    Web(web::WebArgs),

    /// Generate Jetpack Compose theme files or Android XML resources
    Android(android::AndroidArgs),

    /// Generate SwiftUI or UIKit theme files
    Swift(swift::SwiftArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Today's date stamp for generated-file headers.
pub(crate) fn date_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Load a token file and gate it through the full schema validator.
///
/// Returns `Ok(None)` when validation fails; the report has already been
/// printed to stderr and the caller exits with code 1. Warnings are
/// surfaced but do not block generation.
pub(crate) fn load_for_generation(path: &Path, printer: &Printer) -> Result<Option<TokenModel>> {
    let doc = TokenDocument::load(path)?;

    let result = validate_document(&doc);
    if result.has_errors() {
        eprint!("{}", format_report(&result));
        return Ok(None);
    }
    for diagnostic in result.iter() {
        printer.warning("Schema", &diagnostic.message);
    }

    let model = TokenModel::build(&doc)?;
    Ok(Some(model))
}

/// Exit code for a schema validation failure.
pub(crate) const EXIT_VALIDATION: u8 = 1;

/// Run an emitter and deliver its artifacts: into a directory when
/// `output` is given (one confirmation line per file), to stdout
/// otherwise. Returns the process exit code.
pub(crate) fn emit_to_dir_or_stdout(
    emitter: &dyn Emitter,
    model: &TokenModel,
    output: Option<&Path>,
    printer: &Printer,
) -> Result<u8> {
    let artifacts = emitter.emit(model, &date_stamp());

    match output {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|e| DstokError::Io {
                path: dir.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
            for artifact in &artifacts {
                let path = dir.join(&artifact.filename);
                fs::write(&path, &artifact.content).map_err(|e| DstokError::Io {
                    path: path.clone(),
                    message: format!("Failed to write file: {}", e),
                })?;
                printer.status(
                    "Generated",
                    &format!("{} -> {}", artifact.filename, display_path(&path)),
                );
            }
        }
        None => print_artifacts(&artifacts),
    }

    Ok(0)
}

/// Print artifacts to stdout, each preceded by a filename banner when
/// more than one is produced.
pub(crate) fn print_artifacts(artifacts: &[Artifact]) {
    let banner = artifacts.len() > 1;
    for artifact in artifacts {
        if banner {
            println!("// === {} ===\n", artifact.filename);
        }
        println!("{}", artifact.content);
    }
}

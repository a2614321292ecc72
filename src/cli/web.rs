//! Web command implementation.
//!
//! Generates one CSS or SCSS artifact. `--output` names a file (not a
//! directory); without it the stylesheet prints to stdout.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::emit::{CssFlavor, Emitter, WebEmitter};
use crate::error::{DstokError, Result};
use crate::output::{display_path, Printer};

use super::{date_stamp, load_for_generation, print_artifacts, EXIT_VALIDATION};

/// Generate CSS custom properties or SCSS variables
#[derive(Args, Debug)]
pub struct WebArgs {
    /// Token JSON file
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "css")]
    pub format: CssFlavor,

    /// Also generate component utility classes (CSS) or mixins (SCSS)
    #[arg(long)]
    pub components: bool,

    /// Output file path (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: WebArgs) -> Result<u8> {
    let printer = Printer::new();

    let Some(model) = load_for_generation(&args.file, &printer)? else {
        return Ok(EXIT_VALIDATION);
    };

    let emitter = WebEmitter::new(args.format, args.components);
    let artifacts = emitter.emit(&model, &date_stamp());

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| DstokError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            fs::write(path, &artifacts[0].content).map_err(|e| DstokError::Io {
                path: path.clone(),
                message: format!("Failed to write file: {}", e),
            })?;
            printer.status(
                "Generated",
                &format!("{} -> {}", emitter.name(), display_path(path)),
            );
        }
        None => print_artifacts(&artifacts),
    }

    Ok(0)
}

//! Validate command implementation.
//!
//! Reports every schema violation in one pass. The report goes to stdout:
//! reporting is this command's entire purpose, and the exit code carries
//! the pass/fail signal (0 valid, 1 violations, 2 unreadable input).

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::TokenDocument;
use crate::validation::{format_report, validate_document};

use super::EXIT_VALIDATION;

/// Validate a token file against the schema without generating
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Token JSON file to validate
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<u8> {
    let doc = TokenDocument::load(&args.file)?;

    let result = validate_document(&doc);
    print!("{}", format_report(&result));

    if result.has_errors() {
        Ok(EXIT_VALIDATION)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_missing_file_is_input_error() {
        let args = ValidateArgs {
            file: PathBuf::from("/nonexistent/tokens.json"),
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn test_run_invalid_document_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "{}").unwrap();

        let code = run(ValidateArgs { file: path }).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_run_valid_document_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(
            &path,
            r##"{
                "meta": {"name": "T", "source": "s", "version": "1", "generated": "g"},
                "color": {}, "typography": {}, "spacing": {}, "borderRadius": {}, "shadow": {}
            }"##,
        )
        .unwrap();

        let code = run(ValidateArgs { file: path }).unwrap();
        assert_eq!(code, 0);
    }
}

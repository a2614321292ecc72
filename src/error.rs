use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dstok operations
#[derive(Error, Diagnostic, Debug)]
pub enum DstokError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dstok::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dstok::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dstok::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed token at '{path}': missing 'value'")]
    #[diagnostic(code(dstok::model))]
    MalformedToken { path: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(dstok::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DstokError>;

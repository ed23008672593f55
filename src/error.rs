//! Central error types for fsmgen.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic
//! `Display` and `From` implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum FsmError {
    /// IO operation failed (without path context - prefer IoWithPath when path is available)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO operation failed with path context for better error messages
    #[error("IO error at {path}: {error}")]
    IoWithPath {
        error: std::io::Error,
        path: PathBuf,
    },

    /// Descriptor file given on the command line does not exist
    #[error("descriptor file not found: {0}")]
    MissingInputFile(PathBuf),

    /// Descriptor line does not split into three non-empty fields
    #[error("malformed transition at {path}:{line}: {message}")]
    MalformedDescriptorLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Initializer record inside a scanned state table does not split into
    /// three non-empty fields
    #[error("malformed record `{record}` in state table `{table}`: {message}")]
    MalformedTableRecord {
        table: String,
        record: String,
        message: String,
    },

    /// Balanced-delimiter scan ran past the end of the available text
    #[error("unmatched delimiter: {context}")]
    UnmatchedDelimiter { context: String },

    /// Expected template absent from an overriding template directory
    #[error("template file not found: {0}")]
    MissingTemplateFile(PathBuf),
}

/// Convenience type alias for Results using FsmError.
pub type Result<T> = std::result::Result<T, FsmError>;

impl FsmError {
    /// Create an IO error with path context.
    ///
    /// Use this when reading/writing files so the message names the file
    /// that failed.
    #[inline]
    pub fn io_with_path(error: std::io::Error, path: impl AsRef<Path>) -> Self {
        FsmError::IoWithPath {
            error,
            path: path.as_ref().to_path_buf(),
        }
    }
}

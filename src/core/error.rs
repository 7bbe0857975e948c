//! Error taxonomy for the extraction engine.
//!
//! Per-file conditions are non-fatal: the pipeline records them as warnings
//! and keeps going. The only condition that aborts an extraction path is
//! [`ExtractError::MissingRequiredSource`], raised when a targeted
//! `internationalization.dart` extraction is requested and the file is absent.

use thiserror::Error;

/// Maximum nesting depth the flattener will follow before bailing out.
pub const MAX_DEPTH: usize = 128;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be decoded as UTF-8 text.
    #[error("cannot read {path} as UTF-8 text")]
    SourceUnreadable { path: String },

    /// A resource-bundle or JSON file failed to parse as its declared format.
    #[error("malformed {format} in {path}: {reason}")]
    MalformedStructuredData {
        path: String,
        format: &'static str,
        reason: String,
    },

    /// The `kTranslationsMap` literal span could not be located.
    #[error("kTranslationsMap literal not found")]
    LiteralNotFound,

    /// Nested data exceeded [`MAX_DEPTH`] levels.
    #[error("nested structure exceeds maximum depth of {max_depth}")]
    StructureTooDeep { max_depth: usize },

    /// The well-known internationalization file is absent.
    #[error("internationalization file not found: {path}")]
    MissingRequiredSource { path: String },
}

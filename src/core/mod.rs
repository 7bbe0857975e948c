//! Extraction and normalization engine.
//!
//! This is the core of flowlate: everything in here is a pure text or data
//! transformation with no file-system access. The surrounding plumbing
//! (`discover`, `pipeline`, `export`) hands raw file content in and consumes
//! the merged [`TranslationTable`](merge::TranslationTable) that comes out.
//!
//! - `locale`: language-code resolution from filenames and declared lists
//! - `flatten`: nested JSON to dotted-key leaves
//! - `classify`: translatable-prose heuristic for string literals
//! - `dart_map`: the embedded `kTranslationsMap` literal parser
//! - `dart_scan`: translation-key and literal scanning in plain Dart sources
//! - `merge`: the single place where duplicate-key policy is decided

pub mod classify;
pub mod dart_map;
pub mod dart_scan;
pub mod error;
pub mod flatten;
pub mod locale;
pub mod merge;

pub use error::ExtractError;
pub use merge::{CollisionPolicy, CollisionRecord, MergedResult, TableBuilder, TranslationTable};

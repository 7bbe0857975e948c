//! Flowlate - FlutterFlow translation extractor
//!
//! Flowlate is a CLI tool and library for extracting translation strings from
//! FlutterFlow projects. It reads ARB resource bundles, nested translation
//! JSON files, and the `kTranslationsMap` literal embedded in
//! `internationalization.dart`, and merges everything into one translation
//! table for export or coverage analysis.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction and normalization engine
//! - `coverage`: Per-language coverage analysis
//! - `discover`: Source file discovery and classification
//! - `export`: CSV and JSON writers for the finalized table
//! - `pipeline`: Per-file parsing fan-out and merge orchestration
//! - `report`: Terminal output formatting

pub mod cli;
pub mod config;
pub mod core;
pub mod coverage;
pub mod discover;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod utils;

//! Per-file parsing fan-out and merge orchestration.
//!
//! Files are parsed in parallel with rayon - each file is independent - and
//! the parsed results are folded serially into one [`TableBuilder`], which is
//! the only shared state and the single owner of collision policy.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde_json::Value;

use crate::config::Config;
use crate::core::dart_map::{TranslationsMapParse, parse_translations_map};
use crate::core::dart_scan::scan_dart_source;
use crate::core::flatten::flatten_value;
use crate::core::locale::{extract_declared_languages, resolve_language_from_filename};
use crate::core::{ExtractError, MergedResult, TableBuilder};
use crate::discover::{self, FileKind, SourceFile};

/// Everything a run produces: the merged table plus run diagnostics.
#[derive(Debug)]
pub struct ExtractionOutcome {
    pub merged: MergedResult,
    /// Languages declared by `languages()` in the intl file, in declared
    /// order. Empty when no intl file was parsed.
    pub declared_languages: Vec<String>,
    pub warnings: Vec<String>,
    pub files_scanned: usize,
    pub root: PathBuf,
}

impl ExtractionOutcome {
    /// Export column order: declared languages first, in declared order,
    /// followed by any remaining discovered languages in sorted order. A
    /// language found only outside the intl file still gets a column.
    pub fn export_languages(&self) -> Vec<String> {
        let mut languages = self.declared_languages.clone();
        for lang in &self.merged.languages {
            if !languages.contains(lang) {
                languages.push(lang.clone());
            }
        }
        languages
    }
}

/// Per-file parse result. No shared state: safe to produce in parallel.
#[derive(Debug, Default)]
struct ParsedSource {
    source_id: String,
    /// (key, language, text) triples ready for the merger.
    triples: Vec<(String, String, String)>,
    /// Keys with no language mapping (accessors, empty dart-map entries).
    bare_keys: Vec<String>,
    /// Whole-key re-declarations reported by the map-literal parser.
    duplicates: Vec<String>,
    declared_languages: Vec<String>,
    warning: Option<String>,
}

/// Full-project extraction: discover, parse in parallel, merge serially.
pub fn run_extraction(root: &Path, config: &Config) -> ExtractionOutcome {
    let discovery = discover::discover_sources(root, config);
    let files_scanned = discovery.files.len();

    let parsed: Vec<ParsedSource> = discovery
        .files
        .par_iter()
        .map(|file| parse_source(file, config))
        .collect();

    let mut warnings = discovery.warnings;
    let mut builder = TableBuilder::new(config.collision_policy);
    let mut declared_languages = Vec::new();

    for source in parsed {
        if let Some(warning) = source.warning {
            warnings.push(warning);
        }
        for key in &source.duplicates {
            builder.record_duplicate(key, &source.source_id);
        }
        builder.merge_all(source.triples, &source.source_id);
        for key in &source.bare_keys {
            builder.merge_key(key);
        }
        if !source.declared_languages.is_empty() {
            declared_languages = source.declared_languages;
        }
    }

    ExtractionOutcome {
        merged: builder.finish(),
        declared_languages,
        warnings,
        files_scanned,
        root: root.to_path_buf(),
    }
}

/// Targeted extraction of the well-known internationalization file.
///
/// This is the one path where an absent source aborts: the caller asked for
/// this specific file. A present file with no recognizable literal still
/// yields an (empty) outcome with a warning.
pub fn run_intl_extraction(root: &Path, config: &Config) -> Result<ExtractionOutcome, ExtractError> {
    let path = root.join(&config.intl_path);
    if !path.is_file() {
        return Err(ExtractError::MissingRequiredSource {
            path: path.display().to_string(),
        });
    }

    let file = discover::read_source(&path, FileKind::DartSource)?;
    let source = parse_intl_source(&file);

    let mut builder = TableBuilder::new(config.collision_policy);
    let mut warnings = Vec::new();
    if let Some(warning) = &source.warning {
        warnings.push(warning.clone());
    }
    for key in &source.duplicates {
        builder.record_duplicate(key, &source.source_id);
    }
    builder.merge_all(source.triples, &source.source_id);
    for key in &source.bare_keys {
        builder.merge_key(key);
    }

    Ok(ExtractionOutcome {
        merged: builder.finish(),
        declared_languages: source.declared_languages,
        warnings,
        files_scanned: 1,
        root: root.to_path_buf(),
    })
}

fn parse_source(file: &SourceFile, config: &Config) -> ParsedSource {
    match file.kind {
        FileKind::ResourceBundle => parse_resource_bundle(file),
        FileKind::StructuredData => parse_structured_data(file, &config.separator),
        FileKind::DartSource => {
            if is_intl_file(file, config) {
                parse_intl_source(file)
            } else {
                parse_plain_dart(file)
            }
        }
    }
}

fn is_intl_file(file: &SourceFile, config: &Config) -> bool {
    let normalized = file.path.to_string_lossy().replace('\\', "/");
    normalized.ends_with(&config.intl_path) || file.file_name() == "internationalization.dart"
}

/// ARB files are flat: top-level keys are translation keys, `@`-prefixed
/// keys are metadata, and the language comes from the filename.
fn parse_resource_bundle(file: &SourceFile) -> ParsedSource {
    let mut source = ParsedSource {
        source_id: file.source_id(),
        ..ParsedSource::default()
    };

    let value: Value = match serde_json::from_str(&file.content) {
        Ok(value) => value,
        Err(err) => {
            source.warning = Some(
                ExtractError::MalformedStructuredData {
                    path: file.source_id(),
                    format: "ARB",
                    reason: err.to_string(),
                }
                .to_string(),
            );
            return source;
        }
    };

    let Value::Object(map) = value else {
        source.warning = Some(
            ExtractError::MalformedStructuredData {
                path: file.source_id(),
                format: "ARB",
                reason: "top level is not an object".to_string(),
            }
            .to_string(),
        );
        return source;
    };

    let lang = resolve_language_from_filename(file.file_name());
    for (key, value) in map {
        if key.starts_with('@') {
            continue;
        }
        if let Value::String(text) = value {
            source.triples.push((key, lang.clone(), text));
        }
    }

    source
}

/// Nested translation JSON: flatten to dotted keys, keep non-blank strings.
fn parse_structured_data(file: &SourceFile, separator: &str) -> ParsedSource {
    let mut source = ParsedSource {
        source_id: file.source_id(),
        ..ParsedSource::default()
    };

    let value: Value = match serde_json::from_str(&file.content) {
        Ok(value) => value,
        Err(err) => {
            source.warning = Some(
                ExtractError::MalformedStructuredData {
                    path: file.source_id(),
                    format: "JSON",
                    reason: err.to_string(),
                }
                .to_string(),
            );
            return source;
        }
    };

    let flat = match flatten_value(&value, separator) {
        Ok(flat) => flat,
        Err(err) => {
            source.warning = Some(format!("{}: {}", file.source_id(), err));
            return source;
        }
    };

    let lang = resolve_language_from_filename(file.file_name());
    for (key, leaf) in flat {
        if let Value::String(text) = leaf
            && !text.trim().is_empty()
        {
            source.triples.push((key, lang.clone(), text));
        }
    }

    source
}

/// The generated internationalization file: map literal plus declared
/// language list.
fn parse_intl_source(file: &SourceFile) -> ParsedSource {
    let mut source = ParsedSource {
        source_id: file.source_id(),
        declared_languages: extract_declared_languages(&file.content),
        ..ParsedSource::default()
    };

    match parse_translations_map(&file.content) {
        Ok(parse) => absorb_map_parse(&mut source, &parse),
        Err(err) => {
            source.warning = Some(format!("{}: {}", file.source_id(), err));
        }
    }

    source
}

/// Any other Dart file: accessor keys, translatable hardcoded literals, and
/// hand-written translation map declarations (common in lib/l10n helpers).
/// A file without a map literal is the normal case here, not a warning.
fn parse_plain_dart(file: &SourceFile) -> ParsedSource {
    let mut source = ParsedSource {
        source_id: file.source_id(),
        ..ParsedSource::default()
    };

    if let Ok(parse) = parse_translations_map(&file.content) {
        absorb_map_parse(&mut source, &parse);
    }

    let scan = scan_dart_source(&file.content);
    source.bare_keys.extend(scan.accessor_keys);
    source.bare_keys.extend(scan.hardcoded);

    source
}

fn absorb_map_parse(source: &mut ParsedSource, parse: &TranslationsMapParse) {
    source.duplicates.extend(parse.duplicates.iter().cloned());
    for (key, languages) in parse.iter() {
        if languages.is_empty() {
            source.bare_keys.push(key.clone());
        }
        for (lang, text) in languages {
            source
                .triples
                .push((key.clone(), lang.clone(), text.clone()));
        }
    }
}

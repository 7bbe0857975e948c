//! Source file discovery and classification.
//!
//! Walks the project tree and hands each candidate file to the pipeline as a
//! `(path, kind, content)` triple. Reads happen here so the core parsers stay
//! pure text transformations; files that cannot be decoded as UTF-8 are
//! skipped with a warning, never aborting the scan.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::{Config, TRANSLATION_FILE_INDICATORS};
use crate::core::ExtractError;

/// How a discovered file will be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.arb` resource bundle: flat key -> text, one file per language.
    ResourceBundle,
    /// Translation-related JSON with arbitrary nesting.
    StructuredData,
    /// Dart source, scanned for accessors and the map literal.
    DartSource,
}

/// One discovered file with its content already read.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: FileKind,
    pub content: String,
}

impl SourceFile {
    /// Identifier used in collision records and warnings.
    pub fn source_id(&self) -> String {
        self.path.display().to_string()
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct DiscoveryResult {
    pub files: Vec<SourceFile>,
    pub warnings: Vec<String>,
}

/// Classifies a path by extension and, for JSON, by name/path indicators.
///
/// Plain JSON files with no translation indicator in their name or path are
/// not candidates: FlutterFlow projects are full of config JSON.
pub fn classify_path(path: &Path) -> Option<FileKind> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("arb") => Some(FileKind::ResourceBundle),
        Some("dart") => Some(FileKind::DartSource),
        Some("json") if is_likely_translation_file(path) => Some(FileKind::StructuredData),
        _ => None,
    }
}

/// Checks whether a JSON file looks translation-related by filename or path.
pub fn is_likely_translation_file(path: &Path) -> bool {
    let path_lower = path.to_string_lossy().to_lowercase();
    TRANSLATION_FILE_INDICATORS
        .iter()
        .any(|indicator| path_lower.contains(indicator))
}

/// Walks `root` and collects every parseable translation source.
pub fn discover_sources(root: &Path, config: &Config) -> DiscoveryResult {
    let mut result = DiscoveryResult::default();

    let ignore_patterns: Vec<Pattern> = config
        .ignores
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        if is_ignored(path, &ignore_patterns) {
            continue;
        }

        let Some(kind) = classify_path(path) else {
            continue;
        };

        match read_source(path, kind) {
            Ok(file) => result.files.push(file),
            Err(err) => result.warnings.push(format!("skipped: {}", err)),
        }
    }

    result
}

/// Reads one file, classifying decode failures as [`ExtractError::SourceUnreadable`].
pub fn read_source(path: &Path, kind: FileKind) -> Result<SourceFile, ExtractError> {
    let content = fs::read_to_string(path).map_err(|_| ExtractError::SourceUnreadable {
        path: path.display().to_string(),
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        kind,
        content,
    })
}

fn is_ignored(path: &Path, patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    patterns.iter().any(|p| p.matches(&path_str))
}

//! Translation-key scanning in plain Dart sources.
//!
//! Two kinds of candidates come out of a Dart file: keys referenced through
//! localization accessors (`FFLocalizations.of(context).getText('key')`) and
//! hardcoded widget strings (`Text('...')`, `title:`, `label:`, `hintText:`)
//! that look like untranslated prose. Accessor keys are taken as-is;
//! hardcoded literals go through [`classify::is_translatable`] first.

use std::sync::LazyLock;

use regex::Regex;

use super::classify;

// Localization accessor patterns. Capture group 1 is the key, JSON path, or
// property name.
static ACCESSOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"FFLocalizations\.of\(context\)\.getText\(\s*['"]([^'"]+)['"]"#,
        r#"getJsonField\([^,]+,\s*r?['"]([^'"]+)['"]"#,
        r"AppLocalizations\.of\(context\)!\.([a-zA-Z_][a-zA-Z0-9_]*)",
        r"S\.of\(context\)\.([a-zA-Z_][a-zA-Z0-9_]*)",
        r"context\.l10n\.([a-zA-Z_][a-zA-Z0-9_]*)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Widget string literals that often carry untranslated prose.
static LITERAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"Text\(\s*['"]([^'"]{3,}?)['"]"#,
        r#"title:\s*['"]([^'"]{3,}?)['"]"#,
        r#"label:\s*['"]([^'"]{3,}?)['"]"#,
        r#"hintText:\s*['"]([^'"]{3,}?)['"]"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Keys found in one Dart source, deduplicated in first-seen order.
#[derive(Debug, Default)]
pub struct DartScan {
    /// Keys referenced through localization accessors.
    pub accessor_keys: Vec<String>,
    /// Hardcoded literals that pass the translatable heuristic.
    pub hardcoded: Vec<String>,
}

/// Scans Dart source text for translation-key candidates.
pub fn scan_dart_source(content: &str) -> DartScan {
    let mut scan = DartScan::default();

    for pattern in ACCESSOR_PATTERNS.iter() {
        for captures in pattern.captures_iter(content) {
            if let Some(key) = captures.get(1) {
                push_unique(&mut scan.accessor_keys, key.as_str());
            }
        }
    }

    for pattern in LITERAL_PATTERNS.iter() {
        for captures in pattern.captures_iter(content) {
            if let Some(text) = captures.get(1)
                && classify::is_translatable(text.as_str())
            {
                push_unique(&mut scan.hardcoded, text.as_str());
            }
        }
    }

    scan
}

fn push_unique(keys: &mut Vec<String>, candidate: &str) {
    if !keys.iter().any(|k| k == candidate) {
        keys.push(candidate.to_string());
    }
}

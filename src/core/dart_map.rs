//! Parser for the `kTranslationsMap` literal in `internationalization.dart`.
//!
//! FlutterFlow generates a list of maps, divided by `// PageName` comment
//! sections, that gets `.reduce`d into one map at runtime:
//!
//! ```dart
//! final kTranslationsMap = <Map<String, Map<String, String>>>[
//!   // HomePage
//!   {
//!     'greeting': {
//!       'en': 'Hello',
//!       'fr': 'Bonjour',
//!     },
//!   },
//! ].reduce((a, b) => a..addAll(b));
//! ```
//!
//! This parser is pattern-based, not a full Dart parser: it locates the list
//! span, splits it at comment boundaries, and extracts `'key': { ... }`
//! entries with brace-balanced (not nested-brace-safe) captures. Section
//! splitting is a pure text transform; there is no stateful parsing.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::error::ExtractError;

// The list literal followed by the reduce combinator. (?s) lets the
// non-greedy span cross lines.
static MAP_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)final kTranslationsMap = <Map<String, Map<String, String>>>\[(.*?)\]\.reduce\(")
        .unwrap()
});

// Fallback shape without the reduce combinator.
static MAP_SPAN_PLAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)final kTranslationsMap = <Map<String, Map<String, String>>>\[(.*?)\];")
        .unwrap()
});

// Generic hand-written shape: static const Map<String, Map<String, String>>
// name = { ... };. Several can appear in one file.
static CONST_MAP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)static\s+const\s+Map<String,\s*Map<String,\s*String>>\s+\w+\s*=\s*\{(.*?)\};")
        .unwrap()
});

// A `// PageName` line marks a new section.
static SECTION_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*//\s*[A-Za-z]+\s*\n").unwrap());

// 'key': { ...body... } - inner braces are not expected in generated maps.
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)':\s*\{([^}]*)\}").unwrap());

// 'lang': 'text' - the text may be empty.
static LANGUAGE_PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)':\s*'([^']*)'").unwrap());

/// Parsed `kTranslationsMap` content.
///
/// Keys keep first-seen order; a re-declared key keeps its original position
/// but the last occurrence's language map wins wholesale.
#[derive(Debug, Default)]
pub struct TranslationsMapParse {
    keys: Vec<String>,
    entries: HashMap<String, Vec<(String, String)>>,
    /// One record per re-declaration, in document order.
    pub duplicates: Vec<String>,
}

impl TranslationsMapParse {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Language pairs for a key, in declared order.
    pub fn get(&self, key: &str) -> Option<&[(String, String)]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Iterates `(key, language pairs)` in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &[(String, String)])> {
        self.keys
            .iter()
            .filter_map(|key| self.entries.get(key).map(|langs| (key, langs.as_slice())))
    }

    fn insert(&mut self, key: &str, languages: Vec<(String, String)>) {
        if self.entries.contains_key(key) {
            self.duplicates.push(key.to_string());
        } else {
            self.keys.push(key.to_string());
        }
        self.entries.insert(key.to_string(), languages);
    }
}

/// Parses translation map literals out of Dart source text.
///
/// Tries the generated `kTranslationsMap` list form first, then falls back
/// to `static const Map<String, Map<String, String>>` declarations (all of
/// them, in document order). Returns [`ExtractError::LiteralNotFound`] when
/// neither shape is present; entries that do not match the expected shape
/// are skipped silently. Never panics on malformed input.
pub fn parse_translations_map(content: &str) -> Result<TranslationsMapParse, ExtractError> {
    let mut spans: Vec<&str> = Vec::new();
    if let Some(span) = MAP_SPAN_REGEX
        .captures(content)
        .or_else(|| MAP_SPAN_PLAIN_REGEX.captures(content))
        .and_then(|captures| captures.get(1))
    {
        spans.push(span.as_str());
    } else {
        spans.extend(
            CONST_MAP_REGEX
                .captures_iter(content)
                .filter_map(|captures| captures.get(1).map(|m| m.as_str())),
        );
    }

    if spans.is_empty() {
        return Err(ExtractError::LiteralNotFound);
    }

    let mut parse = TranslationsMapParse::default();
    for span in spans {
        parse_span(span, &mut parse);
    }

    Ok(parse)
}

fn parse_span(span: &str, parse: &mut TranslationsMapParse) {
    for section in SECTION_BOUNDARY_REGEX.split(span) {
        if section.trim().is_empty() {
            continue;
        }

        for entry in ENTRY_REGEX.captures_iter(section) {
            let Some(key) = entry.get(1) else { continue };
            let body = entry.get(2).map_or("", |m| m.as_str());

            let mut languages: Vec<(String, String)> = Vec::new();
            for pair in LANGUAGE_PAIR_REGEX.captures_iter(body) {
                let (Some(lang), Some(text)) = (pair.get(1), pair.get(2)) else {
                    continue;
                };
                let lang = lang.as_str().to_string();
                // A language repeated within one entry keeps the last value.
                if let Some(existing) = languages.iter_mut().find(|(l, _)| *l == lang) {
                    existing.1 = text.as_str().to_string();
                } else {
                    languages.push((lang, text.as_str().to_string()));
                }
            }

            parse.insert(key.as_str(), languages);
        }
    }
}

//! Language-code resolution.
//!
//! FlutterFlow projects carry the language code in two places: file names
//! (`app_en.arb`, `translations_fr.json`) and the `languages()` method inside
//! `internationalization.dart`. Both resolvers here are total: unresolvable
//! input degrades to a fallback instead of failing.

use std::sync::LazyLock;

use regex::Regex;

/// Language code used when no pattern matches and the stem has no underscore.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

// Tried in order: `_en.arb` suffix, bare `en.json` stem, `app_en` infix,
// `translations_en` infix.
static FILENAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"_([a-z]{2,3})\.(?:arb|json)$",
        r"^([a-z]{2,3})\.(?:arb|json)$",
        r"app_([a-z]{2,3})",
        r"translations_([a-z]{2,3})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Matches: static List<String> languages() => ['en', 'sg', 'fr'];
static DECLARED_LANGUAGES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"static List<String> languages\(\) => \[(.*?)\];")
        .unwrap()
});

static SINGLE_QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").unwrap());

/// Derives a normalized language code from a filename.
///
/// Never fails: when no pattern matches, falls back to the last
/// underscore-delimited segment of the stem, or [`UNKNOWN_LANGUAGE`] if the
/// filename contains no underscore.
///
/// # Examples
///
/// ```
/// use flowlate::core::locale::resolve_language_from_filename;
///
/// assert_eq!(resolve_language_from_filename("app_en.arb"), "en");
/// assert_eq!(resolve_language_from_filename("translations_fr.json"), "fr");
/// assert_eq!(resolve_language_from_filename("sg.json"), "sg");
/// assert_eq!(resolve_language_from_filename("strings.json"), "unknown");
/// ```
pub fn resolve_language_from_filename(filename: &str) -> String {
    let lower = filename.to_lowercase();

    for pattern in FILENAME_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&lower)
            && let Some(code) = captures.get(1)
        {
            return code.as_str().to_string();
        }
    }

    if lower.contains('_') {
        let stem = lower.split('.').next().unwrap_or(&lower);
        stem.rsplit('_')
            .next()
            .unwrap_or(UNKNOWN_LANGUAGE)
            .to_string()
    } else {
        UNKNOWN_LANGUAGE.to_string()
    }
}

/// Extracts the ordered language codes declared by the `languages()` method.
///
/// Returns an empty vec when the construct is absent.
pub fn extract_declared_languages(content: &str) -> Vec<String> {
    let Some(captures) = DECLARED_LANGUAGES_REGEX.captures(content) else {
        return Vec::new();
    };
    let list = captures.get(1).map_or("", |m| m.as_str());

    SINGLE_QUOTED_REGEX
        .captures_iter(list)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

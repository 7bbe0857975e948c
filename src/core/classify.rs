//! Translatable-string heuristic.
//!
//! Dart sources are full of string literals that are not prose: identifiers,
//! constants, URLs, dotted member paths. Each rejection rule here is a named
//! predicate so it can be tested and extended independently; the public entry
//! point is [`is_translatable`].
//!
//! This is a heuristic filter, not a semantic one. Boundary behavior is
//! pinned by the tests below.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::contains_alphabetic;

/// Minimum accepted length, in characters.
pub const MIN_LENGTH: usize = 2;
/// Maximum accepted length, in characters.
pub const MAX_LENGTH: usize = 200;

static CAMEL_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+[A-Z]").unwrap());

static DOTTED_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+\.\w+").unwrap());

static CONSTANT_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_]+$").unwrap());

static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

static SYMBOLS_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\w\s]+$").unwrap());

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").unwrap());

/// `helloThere`-style identifier: lowercase run immediately followed by an
/// uppercase letter.
pub fn is_camel_case(text: &str) -> bool {
    CAMEL_CASE_REGEX.is_match(text)
}

/// Member-access style token: `config.apiKey`, `user.name`.
pub fn is_dotted_path(text: &str) -> bool {
    DOTTED_PATH_REGEX.is_match(text)
}

/// `CONSTANT_VALUE`-style token.
pub fn is_constant_case(text: &str) -> bool {
    CONSTANT_CASE_REGEX.is_match(text)
}

/// Pure-digit token.
pub fn is_numeric(text: &str) -> bool {
    NUMERIC_REGEX.is_match(text)
}

/// Token made only of symbols (no word characters or whitespace).
pub fn is_symbols_only(text: &str) -> bool {
    SYMBOLS_ONLY_REGEX.is_match(text)
}

/// Token containing an `http://` or `https://` scheme.
pub fn is_url_like(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

/// Token containing an `@`, which usually means an email or handle.
pub fn has_email_marker(text: &str) -> bool {
    text.contains('@')
}

/// Decides whether a candidate string literal looks like human-facing prose.
///
/// Accepts only strings of 2..=200 characters that contain an alphabetic
/// character, pass every rejection predicate above, and contain a space or
/// split into more than one word. Single words are rejected even when they
/// are real prose ("Hello") - multi-word phrases are the signal here.
pub fn is_translatable(text: &str) -> bool {
    let length = text.chars().count();
    if length < MIN_LENGTH || length > MAX_LENGTH {
        return false;
    }

    if is_camel_case(text)
        || is_dotted_path(text)
        || is_constant_case(text)
        || is_numeric(text)
        || is_symbols_only(text)
        || is_url_like(text)
        || has_email_marker(text)
    {
        return false;
    }

    contains_alphabetic(text) && (text.contains(' ') || text.split_whitespace().count() > 1)
}

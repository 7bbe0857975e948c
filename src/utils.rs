//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use flowlate::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("Bonjour123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Truncates text to a display budget, appending `..` when cut.
///
/// Used by the preview table so long translations keep columns aligned.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(2)).collect();
        format!("{}..", cut)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_contains_alphabetic() {
        assert!(contains_alphabetic("Hello"));
        assert!(contains_alphabetic("Hello123"));
        assert!(contains_alphabetic("123 abc"));
        assert!(contains_alphabetic("  abc  "));

        assert!(!contains_alphabetic("123"));
        assert!(!contains_alphabetic("---"));
        assert!(!contains_alphabetic("$100"));
        assert!(!contains_alphabetic("   "));
        assert!(!contains_alphabetic(""));
    }

    #[test]
    fn test_truncate_for_display() {
        assert_eq!(truncate_for_display("short", 10), "short");
        assert_eq!(truncate_for_display("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_for_display("a longer translation", 10), "a longer..");
    }
}

//! Per-language coverage analysis over a finalized table.
//!
//! Answers "how much of the table is translated into language X", for any
//! language code discovered during extraction.

use anyhow::{Result, bail};

use crate::core::MergedResult;

/// Number of existing-translation samples carried in a report.
pub const SAMPLE_LIMIT: usize = 5;

#[derive(Debug)]
pub struct CoverageReport {
    pub lang: String,
    pub total_keys: usize,
    pub translated: usize,
    /// Keys with no non-blank translation for `lang`, sorted.
    pub missing: Vec<String>,
    /// Up to [`SAMPLE_LIMIT`] (key, text) pairs that are translated.
    pub samples: Vec<(String, String)>,
}

impl CoverageReport {
    pub fn percent(&self) -> f64 {
        if self.total_keys == 0 {
            0.0
        } else {
            (self.translated as f64 / self.total_keys as f64) * 100.0
        }
    }
}

/// Computes coverage of `lang` over the merged table.
///
/// A key counts as translated when its text for `lang` is non-blank; an
/// empty string is a placeholder, not a translation. Fails when `lang` was
/// never discovered in any source.
pub fn analyze_coverage(merged: &MergedResult, lang: &str) -> Result<CoverageReport> {
    if !merged.languages.iter().any(|l| l == lang) {
        bail!(
            "language '{}' not found; discovered languages: {}",
            lang,
            merged.languages.join(", ")
        );
    }

    let mut missing = Vec::new();
    let mut samples = Vec::new();
    let mut translated = 0;

    for key in merged.table.sorted_keys() {
        match merged.table.text(key, lang) {
            Some(text) if !text.trim().is_empty() => {
                translated += 1;
                if samples.len() < SAMPLE_LIMIT {
                    samples.push((key.clone(), text.to_string()));
                }
            }
            _ => missing.push(key.clone()),
        }
    }

    Ok(CoverageReport {
        lang: lang.to_string(),
        total_keys: merged.table.len(),
        translated,
        missing,
        samples,
    })
}

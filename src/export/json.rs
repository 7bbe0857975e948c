//! JSON export: metadata plus the full key -> language -> text mapping.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::pipeline::ExtractionOutcome;

#[derive(Debug, Serialize)]
struct ExportMetadata<'a> {
    total_keys: usize,
    languages: &'a [String],
    extracted_from: String,
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    metadata: ExportMetadata<'a>,
    translations: Value,
}

/// Writes the outcome as pretty-printed JSON with a metadata envelope.
///
/// Keys and per-key languages are emitted in sorted order so repeated runs
/// produce byte-identical output.
pub fn write_json(outcome: &ExtractionOutcome, path: &Path) -> Result<()> {
    let document = ExportDocument {
        metadata: ExportMetadata {
            total_keys: outcome.merged.table.len(),
            languages: &outcome.merged.languages,
            extracted_from: outcome.root.display().to_string(),
        },
        translations: translations_value(outcome),
    };

    let content =
        serde_json::to_string_pretty(&document).context("Failed to serialize translations")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write JSON: {}", path.display()))
}

fn translations_value(outcome: &ExtractionOutcome) -> Value {
    let table = &outcome.merged.table;
    let mut translations = Map::new();

    for key in table.sorted_keys() {
        let mut entry = Map::new();
        if let Some(languages) = table.get(key) {
            let mut codes: Vec<&String> = languages.keys().collect();
            codes.sort();
            for code in codes {
                if let Some(text) = languages.get(code) {
                    entry.insert(code.clone(), Value::String(text.clone()));
                }
            }
        }
        translations.insert(key.clone(), Value::Object(entry));
    }

    Value::Object(translations)
}

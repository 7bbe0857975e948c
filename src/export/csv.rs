//! CSV export with RFC 4180 quoting.
//!
//! Header is `Translation Key` plus one uppercased column per language.
//! The template variant appends one empty `<LANG>_NEW` column so a new
//! language can be filled in by hand in a spreadsheet.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::TranslationTable;

/// Writes the table as CSV, one row per key in sorted order.
pub fn write_csv(table: &TranslationTable, languages: &[String], path: &Path) -> Result<()> {
    let content = render_csv(table, languages, None);
    fs::write(path, content).with_context(|| format!("Failed to write CSV: {}", path.display()))
}

/// Writes a translation template: the full table plus an empty
/// `<LANG>_NEW` column for `new_lang`.
pub fn write_template_csv(
    table: &TranslationTable,
    languages: &[String],
    new_lang: &str,
    path: &Path,
) -> Result<()> {
    let content = render_csv(table, languages, Some(new_lang));
    fs::write(path, content)
        .with_context(|| format!("Failed to write template CSV: {}", path.display()))
}

fn render_csv(table: &TranslationTable, languages: &[String], new_lang: Option<&str>) -> String {
    let mut out = String::new();

    let mut header: Vec<String> = vec!["Translation Key".to_string()];
    header.extend(languages.iter().map(|l| l.to_uppercase()));
    if let Some(lang) = new_lang {
        header.push(format!("{}_NEW", lang.to_uppercase()));
    }
    push_row(&mut out, &header);

    for key in table.sorted_keys() {
        let mut row: Vec<String> = vec![key.clone()];
        for lang in languages {
            let text = table.text(key, lang).unwrap_or_default();
            row.push(text.to_string());
        }
        if new_lang.is_some() {
            row.push(String::new());
        }
        push_row(&mut out, &row);
    }

    out
}

fn push_row(out: &mut String, fields: &[String]) {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

/// RFC 4180: quote a field containing commas, quotes, or newlines, doubling
/// any embedded quote.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableBuilder;
    use pretty_assertions::assert_eq;

    fn sample_table() -> TranslationTable {
        let mut builder = TableBuilder::default();
        builder.merge("greeting", "en", "Hello", "src");
        builder.merge("greeting", "fr", "Bonjour", "src");
        builder.merge("farewell", "en", "Goodbye", "src");
        builder.finish().table
    }

    #[test]
    fn test_render_header_and_rows() {
        let languages = vec!["en".to_string(), "fr".to_string()];
        let csv = render_csv(&sample_table(), &languages, None);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Translation Key,EN,FR");
        // Keys are sorted; missing translations render as empty fields.
        assert_eq!(lines[1], "farewell,Goodbye,");
        assert_eq!(lines[2], "greeting,Hello,Bonjour");
    }

    #[test]
    fn test_template_adds_new_column() {
        let languages = vec!["en".to_string()];
        let csv = render_csv(&sample_table(), &languages, Some("sg"));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Translation Key,EN,SG_NEW");
        assert!(lines[1].ends_with(','), "rows end with an empty new column");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_write_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let languages = vec!["en".to_string()];

        write_csv(&sample_table(), &languages, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Translation Key,EN\n"));
        assert_eq!(content.lines().count(), 3);
    }
}

//! Terminal output formatting.
//!
//! This module is separate from the core library logic so flowlate can be
//! used as a library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::CollisionRecord;
use crate::coverage::CoverageReport;
use crate::pipeline::ExtractionOutcome;
use crate::utils::truncate_for_display;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Column budget for the key column in the preview table.
const KEY_COLUMN_WIDTH: usize = 24;
/// Column budget per language in the preview table.
const LANG_COLUMN_WIDTH: usize = 25;
/// Rows shown in the preview table.
const PREVIEW_ROWS: usize = 15;
/// Missing keys listed per coverage report.
const MISSING_DISPLAY_LIMIT: usize = 10;

/// Print the run summary: counts, languages, warnings, collisions.
pub fn print_summary(outcome: &ExtractionOutcome, verbose: bool) {
    let table = &outcome.merged.table;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}: {} translation {}, {} {}",
            outcome.files_scanned,
            if outcome.files_scanned == 1 { "file" } else { "files" },
            table.len(),
            if table.len() == 1 { "key" } else { "keys" },
            outcome.merged.languages.len(),
            if outcome.merged.languages.len() == 1 { "language" } else { "languages" },
        )
        .green()
    );

    if !outcome.merged.languages.is_empty() {
        println!("  languages: {}", outcome.merged.languages.join(", ").cyan());
    }
    if !outcome.declared_languages.is_empty() {
        println!(
            "  declared:  {}",
            outcome.declared_languages.join(", ").cyan()
        );
    }

    print_collisions(&outcome.merged.collisions, verbose);
    print_warnings(&outcome.warnings, verbose);
}

/// Print a truncated preview of the table, one row per key.
pub fn print_preview(outcome: &ExtractionOutcome) {
    let table = &outcome.merged.table;
    if table.is_empty() {
        return;
    }
    let languages = outcome.export_languages();

    let mut header = format!("{:<width$}", "Key", width = KEY_COLUMN_WIDTH);
    for lang in &languages {
        header.push_str(&format!(" | {:<width$}", lang.to_uppercase(), width = LANG_COLUMN_WIDTH));
    }
    println!("{}", header.bold());
    println!("{}", "-".repeat(UnicodeWidthStr::width(header.as_str())));

    for key in table.sorted_keys().into_iter().take(PREVIEW_ROWS) {
        let mut row = format!(
            "{:<width$}",
            truncate_for_display(key, KEY_COLUMN_WIDTH),
            width = KEY_COLUMN_WIDTH
        );
        for lang in &languages {
            let text = table.text(key, lang).unwrap_or_default();
            row.push_str(&format!(
                " | {:<width$}",
                truncate_for_display(text, LANG_COLUMN_WIDTH),
                width = LANG_COLUMN_WIDTH
            ));
        }
        println!("{}", row);
    }

    if table.len() > PREVIEW_ROWS {
        println!("... and {} more", table.len() - PREVIEW_ROWS);
    }
}

/// Print a per-language coverage report.
pub fn print_coverage(report: &CoverageReport) {
    println!(
        "{} coverage: {}/{} keys ({:.1}%)",
        report.lang.to_uppercase().bold(),
        report.translated,
        report.total_keys,
        report.percent()
    );

    if !report.samples.is_empty() {
        println!("\nExisting translations:");
        for (key, text) in &report.samples {
            println!("  - {}: '{}'", key.cyan(), truncate_for_display(text, 50));
        }
    }

    if !report.missing.is_empty() {
        println!(
            "\n{} {} {} missing:",
            FAILURE_MARK.yellow(),
            report.missing.len(),
            if report.missing.len() == 1 { "key" } else { "keys" }
        );
        for key in report.missing.iter().take(MISSING_DISPLAY_LIMIT) {
            println!("  - {}", key);
        }
        if report.missing.len() > MISSING_DISPLAY_LIMIT {
            println!("  ... and {} more", report.missing.len() - MISSING_DISPLAY_LIMIT);
        }
    }
}

fn print_collisions(collisions: &[CollisionRecord], verbose: bool) {
    if collisions.is_empty() {
        return;
    }

    println!(
        "{} {} key {} detected",
        "warning:".bold().yellow(),
        collisions.len(),
        if collisions.len() == 1 { "collision" } else { "collisions" }
    );

    if verbose {
        for record in collisions {
            match (&record.lang, &record.previous, &record.replaced_by) {
                (Some(lang), Some(previous), Some(replaced_by)) => println!(
                    "  {} [{}] '{}' -> '{}' ({})",
                    record.key.cyan(),
                    lang,
                    truncate_for_display(previous, 30),
                    truncate_for_display(replaced_by, 30),
                    record.source_id.dimmed()
                ),
                _ => println!(
                    "  {} re-declared ({})",
                    record.key.cyan(),
                    record.source_id.dimmed()
                ),
            }
        }
    } else {
        println!("  use {} for details", "-v".cyan());
    }
}

fn print_warnings(warnings: &[String], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            eprintln!("{} {}", "warning:".bold().yellow(), warning);
        }
    } else {
        eprintln!(
            "{} {} file(s) skipped (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

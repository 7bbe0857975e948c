use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run, stdout_of};

#[test]
fn test_extract_reports_keys_and_languages() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().arg("extract"));
    assert!(output.status.success(), "expected exit 0");

    let stdout = stdout_of(&output);
    assert!(stdout.contains("4 translation keys"), "stdout: {}", stdout);
    assert!(stdout.contains("languages: en, fr, sg"), "stdout: {}", stdout);
    assert!(stdout.contains("declared:  en, sg, fr"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_extract_csv_export() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().args(["extract", "--csv", "out.csv"]));
    assert!(output.status.success());

    let csv = test.read_file("out.csv")?;
    let mut lines = csv.lines();
    // Declared language order wins over the sorted set.
    assert_eq!(lines.next(), Some("Translation Key,EN,SG,FR"));
    assert!(csv.contains("greeting,Hello,Bara ala,Bonjour"));
    // farewell only exists in English.
    assert!(csv.contains("farewell,Goodbye,,"));
    Ok(())
}

#[test]
fn test_extract_csv_keeps_undeclared_language() -> Result<()> {
    let test = CliTest::with_fixture_project()?;
    // German exists only in a translation JSON, not in the declared list.
    test.write_file(
        "assets/translations/de.json",
        r#"{"home": {"title": "Willkommen"}}"#,
    )?;

    let output = run(test.command().args(["extract", "--csv", "out.csv"]));
    assert!(output.status.success());

    let csv = test.read_file("out.csv")?;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Translation Key,EN,SG,FR,DE"));
    assert!(csv.contains("home.title,,,,Willkommen"), "csv: {}", csv);
    Ok(())
}

#[test]
fn test_extract_json_export() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().args(["extract", "--json", "out.json"]));
    assert!(output.status.success());

    let value: Value = serde_json::from_str(&test.read_file("out.json")?)?;
    assert_eq!(value["metadata"]["total_keys"], 4);
    assert_eq!(value["translations"]["greeting"]["fr"], "Bonjour");
    assert_eq!(value["translations"]["start"]["sg"], "");
    Ok(())
}

#[test]
fn test_extract_collision_exits_nonzero() -> Result<()> {
    let test = CliTest::with_fixture_project()?;
    // Conflicts with 'greeting'/'en' = 'Hello' from the intl file.
    test.write_file("lib/l10n/app_en_extra.arb", r#"{"greeting": "Howdy"}"#)?;

    let output = run(test.command().arg("extract"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("collision"));
    Ok(())
}

#[test]
fn test_extract_skips_malformed_json() -> Result<()> {
    let test = CliTest::with_fixture_project()?;
    test.write_file("assets/translations/de.json", "{ broken")?;

    let output = run(test.command().arg("extract"));
    // Skipped file is reported but the batch still completes.
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("4 translation keys"));
    Ok(())
}

#[test]
fn test_extract_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("extract"));
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("0 translation keys"));
    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr_of, stdout_of};

#[test]
fn test_intl_extracts_map_literal() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().arg("intl"));
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    // Only the map literal, not the ARB file.
    assert!(stdout.contains("3 translation keys"), "stdout: {}", stdout);
    assert!(stdout.contains("greeting"));
    Ok(())
}

#[test]
fn test_intl_missing_source_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("intl"));
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("internationalization"));
    Ok(())
}

#[test]
fn test_intl_without_literal_warns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "lib/flutter_flow/internationalization.dart",
        "class FFLocalizations {}",
    )?;

    let output = run(test.command().args(["intl", "--verbose"]));
    // Present file with no literal: warning + empty table, not an abort.
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("kTranslationsMap"));
    Ok(())
}

#[test]
fn test_intl_csv_export() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().args(["intl", "--csv", "intl.csv"]));
    assert!(output.status.success());

    let csv = test.read_file("intl.csv")?;
    assert!(csv.starts_with("Translation Key,EN,SG,FR\n"));
    assert_eq!(csv.lines().count(), 4);
    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr_of, stdout_of};

#[test]
fn test_coverage_reports_percentages() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().args(["coverage", "--lang", "sg"]));
    // Missing keys exist, so the command signals failure.
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    // Of 4 keys only 'greeting' has a non-blank Sango translation.
    assert!(stdout.contains("SG coverage: 1/4 keys (25.0%)"), "stdout: {}", stdout);
    assert!(stdout.contains("Bara ala"));
    assert!(stdout.contains("3 keys missing"));
    Ok(())
}

#[test]
fn test_coverage_full_language_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/l10n/app_en.arb", r#"{"greeting": "Hello"}"#)?;

    let output = run(test.command().args(["coverage", "--lang", "en"]));
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("EN coverage: 1/1 keys (100.0%)"));
    Ok(())
}

#[test]
fn test_coverage_unknown_language_errors() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().args(["coverage", "--lang", "xx"]));
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("not found"));
    Ok(())
}

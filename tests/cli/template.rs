use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_template_adds_empty_column() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(test.command().args(["template", "--lang", "de"]));
    assert!(output.status.success());

    let csv = test.read_file("translation_template.csv")?;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Translation Key,EN,SG,FR,DE_NEW"));
    for line in lines {
        assert!(line.ends_with(','), "row should end with an empty column: {}", line);
    }
    Ok(())
}

#[test]
fn test_template_custom_output_path() -> Result<()> {
    let test = CliTest::with_fixture_project()?;

    let output = run(
        test.command()
            .args(["template", "--lang", "de", "--output", "custom.csv"]),
    );
    assert!(output.status.success());
    assert!(test.root().join("custom.csv").exists());
    Ok(())
}

use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run, stderr_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"));
    assert!(output.status.success());
    assert!(test.root().join(".flowlaterc.json").exists());

    let content = test.read_file(".flowlaterc.json")?;
    let parsed: Value = serde_json::from_str(&content)?;
    assert!(parsed.get("ignores").is_some());
    assert!(parsed.get("separator").is_some());
    assert!(parsed.get("collisionPolicy").is_some());
    assert!(parsed.get("intlPath").is_some());
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".flowlaterc.json", "{}")?;

    let output = run(test.command().arg("init"));
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("already exists"));
    Ok(())
}

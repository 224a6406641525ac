use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["defaultNamePrefix"], "myStyle");
    assert_eq!(parsed["preferredRegistryName"], "styles");
    assert_eq!(parsed["autoImport"], true);
    assert_eq!(parsed["insertionPolicy"], "bottom");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Created .sheetliftrc.json");
    assert!(test.root().join(".sheetliftrc.json").exists());
    assert_config_content(&test.read_file(".sheetliftrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sheetliftrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stderr(&output).trim_end(), @"Error: .sheetliftrc.json already exists");
    assert_eq!(test.read_file(".sheetliftrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file(
        "App.jsx",
        "export const App = () => <View style={{ flex: 1 }} />;\n",
    )?;

    let output = test
        .extract_command()
        .args(["App.jsx", "--offset", "42"])
        .output()?;

    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("App.jsx", "export const App = () => <View style={{ flex: 1 }} />;\n")?;
    test.write_file(".sheetliftrc.json", r#"{ "preferredRegistryName": "my-styles" }"#)?;

    let output = test
        .extract_command()
        .args(["App.jsx", "--offset", "42"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("preferredRegistryName"));
    Ok(())
}

use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const APP: &str = "import { View } from 'react-native';\n\nexport const App = () => <View style={{ backgroundColor: 'red', width: 100 }} />;\n";

const EXTRACTED: &str = "import { View, StyleSheet } from 'react-native';\n\nexport const App = () => <View style={styles.myStyle1} />;\n\nconst styles = StyleSheet.create({\n\tmyStyle1: {\n\t\tbackgroundColor: 'red',\n\t\twidth: 100,\n\t},\n});\n";

#[test]
fn test_extract_dry_run_prints_rewritten_file() -> Result<()> {
    let test = CliTest::with_file("App.tsx", APP)?;

    let output = test
        .extract_command()
        .args(["App.tsx", "--line", "3", "--column", "45"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), EXTRACTED);
    assert_snapshot!(stderr(&output).trim_end(), @"✓ Would extract 1 style into styles (myStyle1)");
    assert_eq!(test.read_file("App.tsx")?, APP);
    Ok(())
}

#[test]
fn test_extract_apply_writes_file() -> Result<()> {
    let test = CliTest::with_file("App.tsx", APP)?;

    let output = test
        .extract_command()
        .args(["App.tsx", "--line", "3", "--column", "45", "--apply"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Extracted 1 style into styles (myStyle1)\n  --> App.tsx\n"
    );
    assert_eq!(test.read_file("App.tsx")?, EXTRACTED);
    Ok(())
}

#[test]
fn test_extract_by_offset_with_name() -> Result<()> {
    let test = CliTest::with_file("App.tsx", APP)?;
    let offset = APP.find("width").unwrap().to_string();

    let output = test
        .extract_command()
        .args(["App.tsx", "--offset", &offset, "--name", "banner"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("<View style={styles.banner} />"));
    assert!(text.contains("\tbanner: {\n"));
    Ok(())
}

#[test]
fn test_extract_invalid_name_is_a_notice() -> Result<()> {
    let test = CliTest::with_file("App.tsx", APP)?;

    let output = test
        .extract_command()
        .args(["App.tsx", "--line", "3", "--column", "45", "--name", "2col"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "error: Style name '2col' is invalid. Use only letters, numbers, and underscores, and do not start with a number.  name-invalid\n  --> App.tsx\n"
    );
    assert_eq!(test.read_file("App.tsx")?, APP);
    Ok(())
}

#[test]
fn test_extract_on_registry_reference() -> Result<()> {
    let test = CliTest::with_file(
        "App.jsx",
        "export const App = () => <View style={styles.box} />;\n",
    )?;

    let output = test
        .extract_command()
        .args(["App.jsx", "--line", "1", "--column", "47"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with(
        "info: This style is already extracted to a StyleSheet. Select an inline style object to extract instead.  alias-detected\n"
    ));
    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("App.tsx", APP)?;
    test.write_file(
        ".sheetliftrc.json",
        r#"{ "defaultNamePrefix": "box", "preferredRegistryName": "ui", "autoImport": false }"#,
    )?;

    let output = test
        .extract_command()
        .args(["App.tsx", "--line", "3", "--column", "45", "--insert-at", "top"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("const ui = StyleSheet.create({\n\tbox1: {\n"));
    assert!(text.contains("<View style={ui.box1} />"));
    assert!(text.contains("import { View } from 'react-native';"));
    Ok(())
}

#[test]
fn test_extract_sorted_without_comments() -> Result<()> {
    let test = CliTest::with_file(
        "Card.jsx",
        "const Card = () => (\n\t<View\n\t\tstyle={{\n\t\t\t// spacing\n\t\t\tpadding: 8,\n\t\t\tbackgroundColor: 'white',\n\t\t}}\n\t/>\n);\n",
    )?;

    let output = test
        .extract_command()
        .args(["Card.jsx", "--line", "5", "--column", "5", "--sort", "--no-comments"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("\tmyStyle1: {\n\t\tbackgroundColor: 'white',\n\t\tpadding: 8,\n\t},"));
    assert!(!text.contains("spacing"));
    Ok(())
}

#[test]
fn test_extract_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_command()
        .args(["Missing.tsx", "--offset", "0"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read source file"));
    Ok(())
}

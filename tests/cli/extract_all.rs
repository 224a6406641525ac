use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const SCREEN: &str = "import React from 'react';\nimport { Text, View } from 'react-native';\n\nexport const Screen = ({ wide }) => (\n\t<View style={{ flex: 1, flexDirection: wide ? 'row' : 'column' }}>\n\t\t<Text style={{ fontSize: 18 }}>Title</Text>\n\t</View>\n);\n";

#[test]
fn test_extract_all_apply() -> Result<()> {
    let test = CliTest::with_file("Screen.jsx", SCREEN)?;

    let output = test.extract_all_command().args(["Screen.jsx", "--apply"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Extracted 2 styles into styles (myStyle1, myStyle2)\n  --> Screen.jsx\n"
    );
    assert_eq!(
        test.read_file("Screen.jsx")?,
        "import React from 'react';\nimport { Text, View, StyleSheet } from 'react-native';\n\nexport const Screen = ({ wide }) => (\n\t<View style={[\n\t\tstyles.myStyle1,\n\t\t{\n\t\t\tflexDirection: wide ? 'row' : 'column',\n\t\t},\n\t]}>\n\t\t<Text style={styles.myStyle2}>Title</Text>\n\t</View>\n);\n\nconst styles = StyleSheet.create({\n\tmyStyle1: {\n\t\tflex: 1,\n\t},\n\tmyStyle2: {\n\t\tfontSize: 18,\n\t},\n});\n"
    );
    Ok(())
}

#[test]
fn test_extract_all_after_imports() -> Result<()> {
    let test = CliTest::with_file("Screen.jsx", SCREEN)?;

    let output = test
        .extract_all_command()
        .args(["Screen.jsx", "--insert-at", "after-imports"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with(
        "import React from 'react';\nimport { Text, View, StyleSheet } from 'react-native';\n\nconst styles = StyleSheet.create({\n"
    ));
    assert_eq!(test.read_file("Screen.jsx")?, SCREEN);
    Ok(())
}

#[test]
fn test_extract_all_into_existing_registry() -> Result<()> {
    let test = CliTest::with_file(
        "Row.tsx",
        "import { StyleSheet, View } from 'react-native';\n\nexport const Row = () => <View style={{ height: 40 }} />;\n\nconst styles = StyleSheet.create({\n\tmyStyle1: { height: 20 },\n});\n",
    )?;

    let output = test.extract_all_command().args(["Row.tsx", "--apply"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("Row.tsx")?,
        "import { StyleSheet, View } from 'react-native';\n\nexport const Row = () => <View style={styles.myStyle2} />;\n\nconst styles = StyleSheet.create({\n\tmyStyle1: { height: 20 },\n\tmyStyle2: {\n\t\theight: 40,\n\t},\n});\n"
    );
    Ok(())
}

#[test]
fn test_extract_all_duplicate_registry_names() -> Result<()> {
    let source = "const s = StyleSheet.create({ a: {} });\nconst s = StyleSheet.create({ b: {} });\nexport const A = () => <View style={{ flex: 1 }} />;\n";
    let test = CliTest::with_file("A.jsx", source)?;

    let output = test.extract_all_command().args(["A.jsx", "--apply"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "warning: There are multiple StyleSheets named 's'. Please ensure StyleSheet names are unique.  duplicate-registry-name\n  --> A.jsx\n"
    );
    assert_eq!(test.read_file("A.jsx")?, source);
    Ok(())
}

#[test]
fn test_extract_all_without_targets() -> Result<()> {
    let test = CliTest::with_file("A.jsx", "export const A = () => <View />;\n")?;

    let output = test.extract_all_command().arg("A.jsx").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("info: No style objects found to extract.  no-targets\n"));
    Ok(())
}

use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_inspect_lists_registries_and_targets() -> Result<()> {
    let test = CliTest::with_file(
        "App.tsx",
        "import { View } from 'react-native';\n\nexport const App = () => (\n\t<View style={{ flex: 1, opacity: fade }} />\n);\n\nconst styles = StyleSheet.create({\n\tmyStyle1: { flex: 2 },\n});\n",
    )?;

    let output = test.command().args(["inspect", "App.tsx", "--line", "4"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("App.tsx\n"));
    assert!(text.contains("  language: typescriptreact (\u{2713} supported)\n"));
    assert!(text.contains("  dialect:  \u{2713} react-native\n"));
    assert!(text.contains("  line:     \u{2713} inline style\n"));
    assert!(text.contains("1 registry\n  7 | styles: myStyle1, flex\n"));
    assert!(text.contains("1 inline style\n  4:8 | attribute, 1 static, 1 dynamic\n"));
    assert!(text.ends_with("next name: myStyle2\n"));
    Ok(())
}

#[test]
fn test_inspect_plain_file() -> Result<()> {
    let test = CliTest::with_file("notes.md", "# Notes\n")?;

    let output = test.command().args(["inspect", "notes.md"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("  language: unknown (\u{2718} unsupported)\n"));
    assert!(text.contains("0 registries\n"));
    assert!(text.contains("0 inline styles\n"));
    Ok(())
}

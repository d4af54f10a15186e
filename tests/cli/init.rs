use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("pattern").is_some(),
        "Config should have 'pattern' field"
    );
    assert!(
        parsed.get("threshold").is_some(),
        "Config should have 'threshold' field"
    );
    assert!(
        parsed.get("minLength").is_some(),
        "Config should have 'minLength' field"
    );
    assert!(
        parsed.get("ignoreDirs").is_some(),
        "Config should have 'ignoreDirs' field"
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "init should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Created .litduprc.json"));
    assert!(test.root().join(".litduprc.json").exists());

    let content = test.read_file(".litduprc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".litduprc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains(".litduprc.json already exists"));

    Ok(())
}

#[test]
fn test_init_with_cwd_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("packages/app/placeholder.txt", "")?;

    let output = test
        .command()
        .args(["init", "--cwd", "packages/app"])
        .output()?;

    assert!(output.status.success());
    assert!(test.root().join("packages/app/.litduprc.json").exists());

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.ts", r#"const greeting = "hello";"#)?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "scan should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

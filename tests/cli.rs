use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Lays out a minimal ImageSize Compress checkout in a temp directory.
fn project_with_manifest(manifest: &str) -> Result<TempDir> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("src/screens"))?;
    fs::write(temp.path().join("App.js"), "export default App;")?;
    fs::write(temp.path().join("src/screens/MainScreen.js"), "screen")?;
    fs::write(temp.path().join("package.json"), manifest)?;
    Ok(temp)
}

#[test]
fn test_report_with_manifest() -> Result<()> {
    let temp = project_with_manifest(
        r#"{"name":"Foo","version":"1.0.0","dependencies":{"react-native-image-picker":"2.3.1"}}"#,
    )?;

    Command::cargo_bin("appreport")?
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("App Name: Foo"))
        .stdout(predicate::str::contains("Version: 1.0.0"))
        .stdout(predicate::str::contains(
            "  - react-native-image-picker: 2.3.1",
        ))
        .stdout(predicate::str::contains("Not found").count(4));

    Ok(())
}

#[test]
fn test_report_without_manifest() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("App.js"), "export default App;")?;

    Command::cargo_bin("appreport")?
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Technical Stack:"))
        .stdout(predicate::str::contains("App Name").not())
        .stdout(predicate::str::contains("Version:").not());

    Ok(())
}

#[test]
fn test_excluded_and_hidden_entries_absent() -> Result<()> {
    let temp = project_with_manifest("{}")?;
    fs::create_dir_all(temp.path().join("node_modules/react-native"))?;
    fs::write(temp.path().join("node_modules/react-native/index.js"), "x")?;
    fs::create_dir_all(temp.path().join(".git/objects"))?;
    fs::write(temp.path().join(".env"), "API_KEY=secret")?;

    Command::cargo_bin("appreport")?
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains(".git").not())
        .stdout(predicate::str::contains(".env").not())
        .stdout(predicate::str::contains("App.js"))
        .stdout(predicate::str::contains("MainScreen.js"));

    Ok(())
}

#[test]
fn test_static_sections_identical_across_inputs() -> Result<()> {
    let with_manifest = project_with_manifest(r#"{"name":"Foo"}"#)?;
    let bare = TempDir::new()?;

    let first = Command::cargo_bin("appreport")?
        .current_dir(with_manifest.path())
        .output()?;
    let second = Command::cargo_bin("appreport")?
        .current_dir(bare.path())
        .output()?;

    let extract = |bytes: &[u8]| -> String {
        let text = String::from_utf8_lossy(bytes).into_owned();
        let start = text.find("\nCore Features Implemented:").unwrap();
        let end = text.find("\nTechnical Stack:").unwrap();
        text[start..end].to_string()
    };

    assert_eq!(extract(&first.stdout), extract(&second.stdout));
    Ok(())
}

#[test]
fn test_malformed_manifest_aborts() -> Result<()> {
    let temp = project_with_manifest("{not valid json")?;

    Command::cargo_bin("appreport")?
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"));

    Ok(())
}

#[test]
fn test_explicit_path_flags() -> Result<()> {
    let temp = project_with_manifest(r#"{"name":"Foo","version":"2.0.0"}"#)?;
    let elsewhere = TempDir::new()?;

    Command::cargo_bin("appreport")?
        .current_dir(elsewhere.path())
        .args(["--path", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("App Name: Foo"))
        .stdout(predicate::str::contains("Version: 2.0.0"));

    Ok(())
}

#[test]
fn test_manifest_flag_overrides_default_location() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("metadata.json"),
        r#"{"name":"Bar","version":"0.9.0"}"#,
    )?;

    Command::cargo_bin("appreport")?
        .current_dir(temp.path())
        .args(["--manifest", "metadata.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("App Name: Bar"));

    Ok(())
}

#[test]
fn test_run_instructions_always_present() -> Result<()> {
    let temp = TempDir::new()?;

    Command::cargo_bin("appreport")?
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("To Run the App:"))
        .stdout(predicate::str::contains("npm test"))
        .stdout(predicate::str::contains("App Ready for Production!"));

    Ok(())
}

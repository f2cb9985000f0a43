use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn testgen(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_testgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("TESTGEN_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()?;

    if !output.status.success() {
        eprintln!(
            "Command failed with stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

fn write_sources(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir.join("src").join("obj"))?;
    fs::write(
        dir.join("src").join("Calculator.cs"),
        "using System;\nnamespace Math { public class Calculator { public int Add(int a, int b) { return a + b; } } }\n",
    )?;
    fs::write(
        dir.join("src").join("Other.cs"),
        "public class Calculator { public void Reset() {} }\n",
    )?;
    fs::write(dir.join("src").join("obj").join("Generated.cs"), "public class Generated {}\n")?;
    fs::write(dir.join("src").join("Broken.cs"), "}}}}\n")?;
    Ok(())
}

#[test]
fn test_generate_writes_fixture_files() -> Result<()> {
    let temp = TempDir::new()?;
    write_sources(temp.path())?;
    fs::write(
        temp.path().join(".testgen.toml"),
        "[ignore]\npatterns = [\"*/obj/*\"]\n",
    )?;

    let output = testgen(temp.path(), &["generate", "src", "-o", "out"])?;
    assert!(output.status.success());

    let out = temp.path().join("out");
    let first = fs::read_to_string(out.join("Calculator.cs"))?;
    let second = fs::read_to_string(out.join("Calculator1.cs"))?;
    assert!(first.contains("namespace Math.tempnamespace"));
    assert!(first.contains("public void Add_Test()"));
    assert!(second.contains("namespace tempnamespace"));
    assert!(second.contains("public void Reset_Test()"));
    assert!(!out.join("Generated.cs").exists());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Generated 2 fixture(s) from 3 file(s)"));
    assert!(stderr.contains("Skipped 1 file(s)"));
    Ok(())
}

#[test]
fn test_generate_json_output() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("Service.cs");
    fs::write(&file, "public class Service { public void Start() {} }\n")?;

    let output = testgen(
        temp.path(),
        &["generate", "Service.cs", "--format", "json", "--framework", "mstest"],
    )?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let records = json.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["class_name"], "Service");
    assert_eq!(records[0]["namespace_name"], "tempnamespace");
    assert!(records[0]["source"].as_str().unwrap().ends_with("Service.cs"));
    assert!(records[0]["generated_unit"]
        .as_str()
        .unwrap()
        .contains("[TestMethod]"));
    assert!(!temp.path().join("generated-tests").exists());
    Ok(())
}

#[test]
fn test_generate_missing_path_fails() -> Result<()> {
    let temp = TempDir::new()?;
    let output = testgen(temp.path(), &["generate", "does-not-exist"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_explicit_invalid_config_fails() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("A.cs"), "public class A {}\n")?;
    fs::write(temp.path().join("bad.toml"), "[framework]\npreset = \"xunit\"\n")?;

    let output = testgen(temp.path(), &["generate", "A.cs", "--config", "bad.toml"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_init_creates_config_once() -> Result<()> {
    let temp = TempDir::new()?;

    let output = testgen(temp.path(), &["init"])?;
    assert!(output.status.success());
    let contents = fs::read_to_string(temp.path().join(".testgen.toml"))?;
    assert!(contents.contains("[framework]"));

    let again = testgen(temp.path(), &["init"])?;
    assert!(!again.status.success());

    let forced = testgen(temp.path(), &["init", "--force"])?;
    assert!(forced.status.success());
    Ok(())
}

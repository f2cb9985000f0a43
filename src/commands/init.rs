use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# testgen configuration

[framework]
# nunit | mstest
preset = "nunit"
# Uncomment to override the preset:
# import = "NUnit.Framework"
# fixture_attribute = "TestFixture"
# test_attribute = "Test"

[output]
directory = "generated-tests"
extension = "cs"
indent = "    "
# lf | crlf
line_ending = "lf"

[ignore]
patterns = [
    "*/bin/*",
    "*/obj/*",
]
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.output().directory, "generated-tests");
        assert_eq!(config.ignore_patterns().len(), 2);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        init_config_in(temp.path(), false).unwrap();
        assert!(init_config_in(temp.path(), false).is_err());
        init_config_in(temp.path(), true).unwrap();
    }
}

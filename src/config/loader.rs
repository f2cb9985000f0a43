use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::TestgenConfig;
use crate::core::{Error, Result};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".testgen.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<TestgenConfig, String> {
    let config = toml::from_str::<TestgenConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(output) = &config.output {
        if output.extension.trim().is_empty() {
            return Err("output.extension must not be empty".to_string());
        }
        if output.indent.chars().any(|c| c != ' ' && c != '\t') {
            return Err("output.indent may only contain spaces and tabs".to_string());
        }
    }

    if let Some(framework) = &config.framework {
        framework
            .resolve(None)
            .validate()
            .map_err(|e| format!("Invalid [framework] in {}: {}", CONFIG_FILE_NAME, e))?;
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TestgenConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.testgen.toml`.
pub fn load_config_from(start: PathBuf) -> TestgenConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TestgenConfig::default()
        })
}

pub fn load_config() -> TestgenConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            TestgenConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// invalid file is an error here.
pub fn load_config_file(path: &Path) -> Result<TestgenConfig> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: format!("cannot read {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}

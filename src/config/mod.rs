//! Configuration loading for testgen.
//!
//! `.testgen.toml` is looked up in the working directory and up to nine of
//! its ancestors. Missing files give the NUnit defaults; an unreadable or
//! invalid discovered file is logged and ignored.

mod core;
mod loader;

pub use self::core::{FrameworkConfig, IgnoreConfig, OutputConfig, TestgenConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

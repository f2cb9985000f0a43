pub mod walker;
pub mod writer;

pub use walker::{find_source_files, FileWalker};
pub use writer::{plan_output_paths, write_generated, PlannedOutput};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

//! Writing generated fixtures to disk, one file per fixture.

use super::{ensure_dir, write_file};
use crate::core::GeneratedTest;
use crate::synthesis::UniqueNamer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOutput<'a> {
    pub path: PathBuf,
    pub test: &'a GeneratedTest,
}

/// Assign each fixture a file named after its class. Repeated class names
/// in one run get the same counter suffix as stub methods. Collisions are
/// detected case-insensitively so `Foo` and `foo` never overwrite each
/// other on case-insensitive filesystems.
pub fn plan_output_paths<'a>(
    tests: &'a [GeneratedTest],
    directory: &Path,
    extension: &str,
) -> Vec<PlannedOutput<'a>> {
    let mut namer = UniqueNamer::new();
    tests
        .iter()
        .map(|test| {
            let stem = namer.next(&test.class_name.to_lowercase(), test.class_name.clone());
            PlannedOutput {
                path: directory.join(format!("{}.{}", stem, extension)),
                test,
            }
        })
        .collect()
}

/// Write every fixture and return the paths written, in input order.
pub fn write_generated(
    tests: &[GeneratedTest],
    directory: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    ensure_dir(directory)
        .with_context(|| format!("Failed to create output directory {}", directory.display()))?;

    plan_output_paths(tests, directory, extension)
        .into_iter()
        .map(|planned| {
            write_file(&planned.path, &planned.test.generated_unit)
                .with_context(|| format!("Failed to write {}", planned.path.display()))?;
            tracing::debug!(path = %planned.path.display(), "Wrote fixture");
            Ok(planned.path)
        })
        .collect()
}

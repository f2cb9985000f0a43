use crate::cli::OutputFormat;
use crate::config::{self, TestgenConfig};
use crate::core::GeneratedTest;
use crate::formatting::{FormattingConfig, Palette};
use crate::io;
use crate::pipeline::{Generation, TestGenerator};
use crate::synthesis::TestFramework;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug_span, info, warn};

pub struct GenerateConfig {
    pub paths: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub framework: Option<TestFramework>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

/// Outcome of one source file.
#[derive(Debug)]
pub enum FileOutcome {
    Generated(Generation),
    /// Not parseable into a usable unit.
    Skipped,
    /// Could not be read.
    Unreadable,
}

#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// A generated fixture together with the file it came from.
#[derive(Debug, Serialize)]
pub struct GeneratedRecord<'a> {
    pub source: &'a Path,
    #[serde(flatten)]
    pub test: &'a GeneratedTest,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub fixtures_generated: usize,
    pub fixtures_failed: usize,
}

impl GenerateSummary {
    pub fn from_results(results: &[FileResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                summary.files_scanned += 1;
                match &result.outcome {
                    FileOutcome::Generated(generation) => {
                        summary.fixtures_generated += generation.tests.len();
                        summary.fixtures_failed += generation.failures.len();
                    }
                    FileOutcome::Skipped | FileOutcome::Unreadable => {
                        summary.files_skipped += 1;
                    }
                }
                summary
            })
    }
}

pub fn handle_generate(config: GenerateConfig) -> Result<GenerateSummary> {
    let settings = load_settings(config.config.as_deref())?;
    let output = settings.output();
    let generator = TestGenerator::new(
        settings.framework_profile(config.framework),
        output.print_options(),
    )
    .context("Failed to set up the fixture generator")?;

    let files = collect_files(&config.paths, &settings.ignore_patterns())?;
    info!("Generating fixtures for {} C# files", files.len());

    let results = generate_for_files(&generator, &files);
    let summary = GenerateSummary::from_results(&results);

    match config.format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Files => {
            let directory = config
                .output
                .unwrap_or_else(|| PathBuf::from(&output.directory));
            let tests: Vec<GeneratedTest> = results
                .iter()
                .flat_map(|r| match &r.outcome {
                    FileOutcome::Generated(generation) => generation.tests.clone(),
                    _ => Vec::new(),
                })
                .collect();
            io::write_generated(&tests, &directory, &output.extension)?;
            print_summary(&summary, &directory, Palette::new(config.formatting_config));
        }
    }

    if summary.fixtures_failed > 0 {
        anyhow::bail!(
            "{} fixture(s) could not be generated",
            summary.fixtures_failed
        );
    }

    Ok(summary)
}

fn load_settings(explicit: Option<&Path>) -> Result<TestgenConfig> {
    match explicit {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Expand the given paths into C# files. Duplicates are dropped while the
/// first occurrence keeps its position.
pub fn collect_files(paths: &[PathBuf], ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = std::collections::HashSet::new();
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
        let found = io::find_source_files(path, ignore_patterns)
            .with_context(|| format!("Failed to scan {}", path.display()))?;
        files.extend(found.into_iter().filter(|f| seen.insert(f.clone())));
    }
    Ok(files)
}

/// Run the pipeline over every file on the rayon pool. Results keep the
/// order of `files`.
pub fn generate_for_files(generator: &TestGenerator, files: &[PathBuf]) -> Vec<FileResult> {
    files
        .par_iter()
        .map(|path| FileResult {
            path: path.clone(),
            outcome: generate_for_file(generator, path),
        })
        .collect()
}

fn generate_for_file(generator: &TestGenerator, path: &Path) -> FileOutcome {
    let _span = debug_span!("generate_file", path = %path.display()).entered();

    let source = match io::read_file(path) {
        Ok(source) => source,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read source file");
            return FileOutcome::Unreadable;
        }
    };

    match generator.generate_at(&source, Some(path)) {
        Some(generation) => FileOutcome::Generated(generation),
        None => {
            warn!(path = %path.display(), "Skipping file that could not be parsed");
            FileOutcome::Skipped
        }
    }
}

fn print_json(results: &[FileResult]) -> Result<()> {
    let records: Vec<GeneratedRecord> = results
        .iter()
        .flat_map(|r| match &r.outcome {
            FileOutcome::Generated(generation) => generation
                .tests
                .iter()
                .map(|test| GeneratedRecord {
                    source: &r.path,
                    test,
                })
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&records)?;
    println!("{}", json);
    Ok(())
}

fn print_summary(summary: &GenerateSummary, directory: &Path, palette: Palette) {
    for line in render_summary(summary, directory, &palette) {
        eprintln!("{}", line);
    }
}

/// Human-facing lines for a files run; counts that are zero are omitted.
pub fn render_summary(
    summary: &GenerateSummary,
    directory: &Path,
    palette: &Palette,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} fixture(s) from {} file(s) into {}",
        palette.success("Generated"),
        palette.bold(&summary.fixtures_generated.to_string()),
        summary.files_scanned,
        directory.display()
    )];
    if summary.files_skipped > 0 {
        lines.push(format!(
            "{} {} file(s) could not be parsed or read",
            palette.warning("Skipped"),
            summary.files_skipped
        ));
    }
    if summary.fixtures_failed > 0 {
        lines.push(format!(
            "{} {} fixture(s)",
            palette.error("Failed"),
            summary.fixtures_failed
        ));
    }
    lines
}

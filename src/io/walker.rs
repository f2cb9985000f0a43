use crate::core::Language;
use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects C# sources under a root, honoring `.gitignore` and the
/// configured ignore globs. A root that is itself a file is returned as is
/// when it passes the same filters.
pub struct FileWalker {
    root: PathBuf,
    languages: Vec<Language>,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            languages: vec![Language::CSharp],
            ignore_patterns: vec![],
        }
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    /// Invalid glob patterns are logged and skipped.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns
            .iter()
            .filter_map(|pattern| match glob::Pattern::new(pattern) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "Ignoring invalid glob pattern");
                    None
                }
            })
            .collect();
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !self.languages.contains(&Language::from_path(path)) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.ignore_patterns.iter().any(|p| p.matches(&path_str))
    }
}

pub fn find_source_files(root: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_ignore_patterns(ignore_patterns)
        .walk()
}

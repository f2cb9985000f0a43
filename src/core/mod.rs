pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use errors::{Error, Result, ResultExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    CSharp,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[(&["cs"], Language::CSharp)];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::CSharp => write!(f, "C#"),
            Language::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Normalize a dotted path for comparison: whitespace is dropped and a
/// leading `global::` alias qualifier is removed.
pub fn normalize_path(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .strip_prefix("global::")
        .map(str::to_string)
        .unwrap_or(compact)
}

/// A `using` directive, reduced to what the generated unit needs.
///
/// `using static` directives never become an `ImportDirective`; they import
/// members rather than namespaces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportDirective {
    /// Normalized dotted path (or alias target)
    pub path: String,
    /// Alias name for `using Alias = Target;`
    pub alias: Option<String>,
}

impl ImportDirective {
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_path(path),
            alias: None,
        }
    }

    pub fn aliased(alias: &str, target: &str) -> Self {
        Self {
            path: normalize_path(target),
            alias: Some(alias.trim().to_string()),
        }
    }

    /// Key used for semantic deduplication.
    pub fn dedup_key(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{}={}", alias, self.path),
            None => self.path.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMethodDescriptor {
    pub name: String,
}

impl PublicMethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One public class found in a source unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    /// Full dotted name of the namespace the class is declared directly in.
    /// `None` for file-scope classes and for classes nested in another type.
    pub namespace: Option<String>,
    /// Directly-declared public methods in declaration order
    pub methods: Vec<PublicMethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, namespace: Option<String>) -> Self {
        Self {
            name: name.into(),
            namespace,
            methods: Vec::new(),
        }
    }

    pub fn with_methods<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods
            .extend(names.into_iter().map(PublicMethodDescriptor::new));
        self
    }
}

/// Everything discovery extracts from one parsed source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub namespaces: Vec<String>,
    pub imports: Vec<ImportDirective>,
    pub classes: Vec<ClassDescriptor>,
}

impl SourceUnit {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Deduplicated, insertion-ordered import set with a fixed trailing
/// test-framework import.
///
/// Read-only once built; shared by every fixture generated from the same
/// source unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportContext {
    entries: Vec<ImportDirective>,
    seen: HashSet<String>,
    framework: ImportDirective,
}

impl ImportContext {
    pub fn new(framework: ImportDirective) -> Self {
        Self {
            entries: Vec::new(),
            seen: HashSet::new(),
            framework,
        }
    }

    /// Insert a directive unless one with the same normalized path is
    /// already present. Returns whether it was added.
    pub fn insert(&mut self, directive: ImportDirective) -> bool {
        if self.seen.insert(directive.dedup_key()) {
            self.entries.push(directive);
            true
        } else {
            false
        }
    }

    /// All directives in output order, framework import last.
    pub fn iter(&self) -> impl Iterator<Item = &ImportDirective> {
        self.entries.iter().chain(std::iter::once(&self.framework))
    }

    /// Directives gathered from the source, without the framework import.
    pub fn entries(&self) -> &[ImportDirective] {
        &self.entries
    }

    pub fn framework(&self) -> &ImportDirective {
        &self.framework
    }

    pub fn contains_path(&self, path: &str) -> bool {
        let key = normalize_path(path);
        self.iter().any(|d| d.alias.is_none() && d.path == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One generated fixture. Detached from the parse tree it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTest {
    pub class_name: String,
    pub namespace_name: String,
    pub generated_unit: String,
}

impl GeneratedTest {
    pub fn new(
        class_name: impl Into<String>,
        namespace_name: impl Into<String>,
        generated_unit: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            namespace_name: namespace_name.into(),
            generated_unit: generated_unit.into(),
        }
    }
}

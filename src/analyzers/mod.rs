use crate::core::ast::CSharpAst;
use crate::core::{Language, Result, SourceUnit};
use std::path::Path;

pub mod csharp;

/// Source-language front end: parse text, then extract a `SourceUnit`.
pub trait Analyzer: Send + Sync {
    /// `None` means the parser produced nothing usable.
    fn parse(&self, content: &str, path: Option<&Path>) -> Option<CSharpAst>;
    fn extract(&self, ast: &CSharpAst) -> SourceUnit;
    fn language(&self) -> Language;

    fn discover(&self, content: &str) -> Option<SourceUnit> {
        self.discover_at(content, None)
    }

    fn discover_at(&self, content: &str, path: Option<&Path>) -> Option<SourceUnit> {
        self.parse(content, path).map(|ast| self.extract(&ast))
    }
}

pub fn get_analyzer(language: Language) -> Result<Option<Box<dyn Analyzer>>> {
    match language {
        Language::CSharp => Ok(Some(Box::new(csharp::CSharpAnalyzer::new()?))),
        Language::Unknown => Ok(None),
    }
}

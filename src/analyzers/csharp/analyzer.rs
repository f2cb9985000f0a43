use super::parser::{has_parse_errors, parse_source};
use super::visitor::extract_source_unit;
use crate::analyzers::Analyzer;
use crate::core::ast::CSharpAst;
use crate::core::{Language, Result, SourceUnit};
use std::path::Path;
use tracing::{debug, debug_span, warn};

/// Discovers public classes, namespaces and imports in C# sources.
///
/// Holds no per-call state; each call builds its own parser, so one
/// analyzer can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct CSharpAnalyzer {
    _private: (),
}

impl CSharpAnalyzer {
    /// Verifies once that the bundled grammar is compatible with the linked
    /// tree-sitter runtime.
    pub fn new() -> Result<Self> {
        super::parser::new_parser()?;
        Ok(Self { _private: () })
    }
}

impl Analyzer for CSharpAnalyzer {
    fn parse(&self, content: &str, path: Option<&Path>) -> Option<CSharpAst> {
        let _span = debug_span!("parse_file", path = ?path).entered();

        let start = std::time::Instant::now();
        match parse_source(content, path) {
            Ok(Some(ast)) => {
                debug!(
                    time_ms = start.elapsed().as_millis(),
                    bytes = content.len(),
                    has_errors = has_parse_errors(&ast),
                    "Parsed file"
                );
                Some(ast)
            }
            Ok(None) => {
                debug!(bytes = content.len(), "No usable compilation unit");
                None
            }
            Err(e) => {
                warn!(error = %e, "Parser setup failed");
                None
            }
        }
    }

    fn extract(&self, ast: &CSharpAst) -> SourceUnit {
        let unit = extract_source_unit(ast);
        debug!(
            namespaces = unit.namespaces.len(),
            imports = unit.imports.len(),
            classes = unit.classes.len(),
            "Discovery complete"
        );
        unit
    }

    fn language(&self) -> Language {
        Language::CSharp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_end_to_end() {
        let analyzer = CSharpAnalyzer::new().unwrap();
        let unit = analyzer
            .discover("public class Foo { public void Bar() {} }")
            .unwrap();
        assert_eq!(unit.classes.len(), 1);
        assert_eq!(unit.classes[0].name, "Foo");
    }

    #[test]
    fn test_discover_unparseable_returns_none() {
        let analyzer = CSharpAnalyzer::new().unwrap();
        assert!(analyzer.discover("}}}}").is_none());
    }

    #[test]
    fn test_discover_best_effort_on_local_errors() {
        let analyzer = CSharpAnalyzer::new().unwrap();
        let unit = analyzer
            .discover("public class Foo { public void Bar() {} ")
            .expect("best-effort unit");
        assert_eq!(unit.classes.len(), 1);
        assert_eq!(unit.classes[0].name, "Foo");
        assert_eq!(unit.classes[0].methods[0].name, "Bar");
    }

    #[test]
    fn test_language() {
        assert_eq!(CSharpAnalyzer::new().unwrap().language(), Language::CSharp);
    }
}

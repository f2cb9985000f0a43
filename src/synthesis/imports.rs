use crate::core::{ImportContext, ImportDirective, SourceUnit};

/// Merge a unit's imports with one import per declared namespace, then add
/// the framework import.
///
/// Deduplication is by normalized path. The framework import is appended
/// even when the source already imports it.
pub fn build_import_context(unit: &SourceUnit, framework_import: &str) -> ImportContext {
    let mut context = ImportContext::new(ImportDirective::new(framework_import));

    for directive in &unit.imports {
        context.insert(directive.clone());
    }
    for namespace in &unit.namespaces {
        context.insert(ImportDirective::new(namespace));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn paths(context: &ImportContext) -> Vec<String> {
        context.iter().map(|d| d.dedup_key()).collect()
    }

    #[test]
    fn test_order_is_imports_then_namespaces_then_framework() {
        let unit = SourceUnit {
            namespaces: vec!["App".into(), "App.Models".into()],
            imports: vec![ImportDirective::new("System"), ImportDirective::new("System.Linq")],
            classes: vec![],
        };
        let context = build_import_context(&unit, "NUnit.Framework");
        assert_eq!(
            paths(&context),
            vec!["System", "System.Linq", "App", "App.Models", "NUnit.Framework"]
        );
    }

    #[test]
    fn test_namespace_already_imported_is_not_repeated() {
        let unit = SourceUnit {
            namespaces: vec!["App.Models".into()],
            imports: vec![ImportDirective::new("App.Models")],
            classes: vec![],
        };
        let context = build_import_context(&unit, "NUnit.Framework");
        assert_eq!(paths(&context), vec!["App.Models", "NUnit.Framework"]);
    }

    #[test]
    fn test_framework_import_is_unconditional() {
        let unit = SourceUnit {
            namespaces: vec![],
            imports: vec![ImportDirective::new("NUnit.Framework")],
            classes: vec![],
        };
        let context = build_import_context(&unit, "NUnit.Framework");
        assert_eq!(paths(&context), vec!["NUnit.Framework", "NUnit.Framework"]);
    }

    fn dotted() -> impl Strategy<Value = String> {
        prop::collection::vec("[A-Z][a-z]{0,4}", 1..4).prop_map(|parts| parts.join("."))
    }

    proptest! {
        #[test]
        fn prop_context_covers_sources_without_duplicates(
            imports in prop::collection::vec(dotted(), 0..10),
            namespaces in prop::collection::vec(dotted(), 0..5),
        ) {
            let unit = SourceUnit {
                namespaces: namespaces.clone(),
                imports: imports.iter().map(|p| ImportDirective::new(p)).collect(),
                classes: vec![],
            };
            let context = build_import_context(&unit, "Fixed.Framework");
            let all = paths(&context);

            // Everything from the source is present
            for path in imports.iter().chain(&namespaces) {
                prop_assert!(all.contains(path));
            }
            // Framework import is last and appears exactly once as the tail
            prop_assert_eq!(all.last().map(String::as_str), Some("Fixed.Framework"));
            // No duplicates before the framework entry
            let head = &all[..all.len() - 1];
            let distinct: HashSet<_> = head.iter().collect();
            prop_assert_eq!(distinct.len(), head.len());
        }
    }
}

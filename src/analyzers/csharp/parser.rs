//! Tree-sitter parser integration for C#
//!
//! Provides parsing using the tree-sitter-c-sharp grammar and the small set of
//! node helpers the discovery visitor needs.

use super::node_kinds::{COMMENT, COMPILATION_UNIT};
use crate::core::ast::CSharpAst;
use crate::core::Result;
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser};

/// Get the tree-sitter language for C#
pub fn language() -> TsLanguage {
    tree_sitter_c_sharp::LANGUAGE.into()
}

/// Build a parser configured for C#.
pub fn new_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser.set_language(&language())?;
    Ok(parser)
}

/// Parse C# source code into a tree-sitter AST.
///
/// Returns `Ok(None)` when tree-sitter produces no tree or the root is not
/// usable as a compilation unit.
pub fn parse_source(content: &str, path: Option<&Path>) -> Result<Option<CSharpAst>> {
    let mut parser = new_parser()?;

    let Some(tree) = parser.parse(content, None) else {
        return Ok(None);
    };

    if !is_usable_root(&tree.root_node()) {
        return Ok(None);
    }

    Ok(Some(CSharpAst {
        tree,
        source: content.to_string(),
        path: path.map(Path::to_path_buf),
    }))
}

/// A root is usable when it is a compilation unit and, if it contains
/// errors, something other than comments survives somewhere below it.
/// Declarations swallowed by an error node still count; the visitor
/// recovers them.
pub fn is_usable_root(root: &Node) -> bool {
    if root.is_error() || root.kind() != COMPILATION_UNIT {
        return false;
    }
    !root.has_error() || has_recoverable_content(root)
}

fn has_recoverable_content(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != COMMENT)
        .any(|child| !child.is_error() || has_recoverable_content(&child));
    found
}

/// Check if a parse tree has errors
pub fn has_parse_errors(ast: &CSharpAst) -> bool {
    ast.tree.root_node().has_error()
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

//! Discovery visitor for C# compilation units
//!
//! Walks the whole tree once and records namespaces, non-static `using`
//! directives and explicitly public classes with their public methods.

use super::node_kinds::{
    ALIAS_EQUALS, CLASS_DECLARATION, CLASS_KEYWORD, CLOSE_BRACE, COMMENT, DECLARATION_LIST,
    FILE_SCOPED_NAMESPACE_DECLARATION, IDENTIFIER, METHOD_DECLARATION, MODIFIER,
    NAMESPACE_DECLARATION, NAMESPACE_KEYWORD, NAME_EQUALS, OTHER_TYPE_KEYWORDS, QUALIFIED_NAME,
    STATIC_KEYWORD, TYPE_DECLARATIONS, USING_DIRECTIVE,
};
use super::parser::node_text;
use super::visibility::{is_publicly_visible, Visibility};
use crate::core::ast::CSharpAst;
use crate::core::{
    normalize_path, ClassDescriptor, ImportDirective, PublicMethodDescriptor, SourceUnit,
};
use tree_sitter::Node;

/// Extract a `SourceUnit` from a parsed C# file
pub fn extract_source_unit(ast: &CSharpAst) -> SourceUnit {
    let mut visitor = DiscoveryVisitor::new(&ast.source);
    visitor.visit_children(ast.root(), None);
    visitor.unit
}

struct DiscoveryVisitor<'a> {
    source: &'a str,
    unit: SourceUnit,
}

impl<'a> DiscoveryVisitor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            unit: SourceUnit::default(),
        }
    }

    fn text(&self, node: &Node) -> &'a str {
        node_text(node, self.source)
    }

    /// Visit the children of a container. `namespace` is set only when the
    /// container is itself a namespace body, so a class found here has a
    /// namespace as its syntactic parent.
    fn visit_children(&mut self, node: Node, namespace: Option<&str>) {
        let mut scope = namespace.map(str::to_string);
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == FILE_SCOPED_NAMESPACE_DECLARATION {
                // Applies to everything after it, whether the grammar nests
                // those declarations or leaves them as siblings.
                if let Some(full) = self.record_namespace(&child, scope.as_deref()) {
                    self.visit_children(child, Some(&full));
                    scope = Some(full);
                }
                continue;
            }
            self.visit_node(child, scope.as_deref());
        }
    }

    fn visit_node(&mut self, node: Node, namespace: Option<&str>) {
        match node.kind() {
            USING_DIRECTIVE => {
                if let Some(directive) = self.parse_using(&node) {
                    self.unit.imports.push(directive);
                }
            }
            NAMESPACE_DECLARATION => {
                if let Some(full) = self.record_namespace(&node, namespace) {
                    if let Some(body) = declaration_body(&node) {
                        self.visit_children(body, Some(&full));
                    }
                }
            }
            CLASS_DECLARATION => self.visit_class(node, namespace),
            kind if TYPE_DECLARATIONS.contains(&kind) => self.visit_children(node, None),
            COMMENT => {}
            _ if node.is_error() => self.visit_error(node, namespace),
            _ => self.visit_children(node, namespace),
        }
    }

    fn record_namespace(&mut self, node: &Node, enclosing: Option<&str>) -> Option<String> {
        let name = node.child_by_field_name("name")?;
        self.push_namespace(self.text(&name), enclosing)
    }

    fn push_namespace(&mut self, raw: &str, enclosing: Option<&str>) -> Option<String> {
        let name = normalize_path(raw);
        if name.is_empty() {
            return None;
        }

        let full = match enclosing {
            Some(outer) => format!("{}.{}", outer, name),
            None => name,
        };
        self.unit.namespaces.push(full.clone());
        Some(full)
    }

    /// Recover declarations from an error node's flat token run.
    ///
    /// Unbalanced braces make tree-sitter fold the surrounding declaration
    /// into an `ERROR` node: `public class Foo {` arrives as a modifier, the
    /// `class` token and an identifier, followed by the members that still
    /// parsed. A `namespace` token plus name opens a namespace scope for the
    /// rest of the node; `class` plus name opens a class that collects the
    /// method declarations after it until a closing brace.
    fn visit_error(&mut self, node: Node, namespace: Option<&str>) {
        let mut scope = namespace.map(str::to_string);
        let mut modifiers: Vec<&'a str> = Vec::new();
        let mut pending_keyword: Option<&'static str> = None;
        let mut open_type: Option<RecoveredType> = None;

        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children {
            match child.kind() {
                MODIFIER => modifiers.push(self.text(&child).trim()),
                CLASS_KEYWORD if !child.is_named() => pending_keyword = Some(CLASS_KEYWORD),
                NAMESPACE_KEYWORD if !child.is_named() => {
                    pending_keyword = Some(NAMESPACE_KEYWORD);
                    modifiers.clear();
                }
                kind if !child.is_named() && OTHER_TYPE_KEYWORDS.contains(&kind) => {
                    pending_keyword = None;
                    open_type = Some(RecoveredType::Other);
                    modifiers.clear();
                }
                IDENTIFIER | QUALIFIED_NAME if pending_keyword.is_some() => {
                    let name = self.text(&child);
                    match pending_keyword.take() {
                        Some(CLASS_KEYWORD) => {
                            let public =
                                Visibility::from_modifiers(modifiers.iter().copied())
                                    == Visibility::Public;
                            let class_scope = if open_type.is_some() {
                                None
                            } else {
                                scope.as_deref()
                            };
                            open_type = Some(self.recover_class(name, public, class_scope));
                        }
                        _ if open_type.is_none() => {
                            if let Some(full) = self.push_namespace(name, scope.as_deref()) {
                                scope = Some(full);
                            }
                        }
                        _ => {}
                    }
                    modifiers.clear();
                }
                METHOD_DECLARATION => {
                    if let Some(RecoveredType::Class(index)) = open_type {
                        if is_publicly_visible(&child, self.source) {
                            if let Some(name) = self.method_name(&child) {
                                self.unit.classes[index]
                                    .methods
                                    .push(PublicMethodDescriptor::new(name));
                            }
                        }
                    }
                    modifiers.clear();
                }
                CLOSE_BRACE if !child.is_named() => open_type = None,
                COMMENT => {}
                _ if child.is_named() => {
                    modifiers.clear();
                    let parent = if open_type.is_some() {
                        None
                    } else {
                        scope.clone()
                    };
                    self.visit_node(child, parent.as_deref());
                }
                _ => {}
            }
        }
    }

    fn recover_class(
        &mut self,
        name: &str,
        public: bool,
        namespace: Option<&str>,
    ) -> RecoveredType {
        let name = name.trim();
        if !public || name.is_empty() {
            return RecoveredType::Other;
        }
        self.unit
            .classes
            .push(ClassDescriptor::new(name, namespace.map(str::to_string)));
        RecoveredType::Class(self.unit.classes.len() - 1)
    }

    fn visit_class(&mut self, node: Node, namespace: Option<&str>) {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(&n).trim())
            .filter(|n| !n.is_empty());

        if let Some(name) = name {
            if is_publicly_visible(&node, self.source) {
                let methods = declaration_body(&node)
                    .map(|body| self.public_method_names(&body))
                    .unwrap_or_default();
                let descriptor = ClassDescriptor::new(name, namespace.map(str::to_string))
                    .with_methods(methods);
                self.unit.classes.push(descriptor);
            }
        }

        // Nested types have a class as their parent, never a namespace.
        if let Some(body) = declaration_body(&node) {
            self.visit_children(body, None);
        }
    }

    fn public_method_names(&self, body: &Node) -> Vec<&'a str> {
        let mut cursor = body.walk();
        let names = body
            .named_children(&mut cursor)
            .filter(|member| member.kind() == METHOD_DECLARATION)
            .filter(|member| is_publicly_visible(member, self.source))
            .filter_map(|member| self.method_name(&member))
            .collect();
        names
    }

    fn method_name(&self, member: &Node) -> Option<&'a str> {
        member
            .child_by_field_name("name")
            .map(|name| self.text(&name).trim())
            .filter(|name| !name.is_empty())
    }

    fn parse_using(&self, node: &Node) -> Option<ImportDirective> {
        let mut is_static = false;
        let mut saw_equals = false;
        let mut before: Option<&str> = None;
        let mut after: Option<&str> = None;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                STATIC_KEYWORD if !child.is_named() => is_static = true,
                ALIAS_EQUALS if !child.is_named() => saw_equals = true,
                NAME_EQUALS => {
                    // using Alias = Target; on grammars that wrap the alias
                    let mut inner = child.walk();
                    before = child
                        .named_children(&mut inner)
                        .find(|n| n.kind() == IDENTIFIER)
                        .map(|n| self.text(&n));
                    saw_equals = true;
                }
                COMMENT => {}
                _ if child.is_named() => {
                    let text = self.text(&child);
                    if saw_equals {
                        after = Some(text);
                    } else {
                        before = Some(text);
                    }
                }
                _ => {}
            }
        }

        if is_static {
            return None;
        }

        match (saw_equals, before, after) {
            (true, Some(alias), Some(target)) => Some(ImportDirective::aliased(alias, target)),
            (false, Some(path), _) if !normalize_path(path).is_empty() => {
                Some(ImportDirective::new(path))
            }
            _ => None,
        }
    }
}

/// A type declaration reopened from an error node. Only public classes
/// get a descriptor; anything else just absorbs the members that follow.
#[derive(Debug, Clone, Copy)]
enum RecoveredType {
    Class(usize),
    Other,
}

/// The `{ ... }` member list of a namespace or type declaration.
fn declaration_body<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if let Some(body) = node.child_by_field_name("body") {
        if body.kind() == DECLARATION_LIST {
            return Some(body);
        }
    }
    let mut cursor = node.walk();
    let body = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == DECLARATION_LIST);
    body
}

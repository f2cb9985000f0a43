//! Declared-visibility queries over C# modifier lists.

use super::node_kinds::MODIFIER;
use super::parser::node_text;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// Accessibility as written in the source. `Default` means no access
/// modifier at all; we never apply the language's implicit defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    ProtectedInternal,
    Internal,
    Protected,
    PrivateProtected,
    Private,
    Default,
}

impl Visibility {
    pub fn from_modifiers<'a>(modifiers: impl IntoIterator<Item = &'a str>) -> Self {
        let (mut public, mut internal, mut protected, mut private) = (false, false, false, false);
        for modifier in modifiers {
            match modifier {
                "public" => public = true,
                "internal" => internal = true,
                "protected" => protected = true,
                "private" => private = true,
                _ => {}
            }
        }

        match (public, protected, internal, private) {
            (true, _, _, _) => Visibility::Public,
            (_, true, true, _) => Visibility::ProtectedInternal,
            (_, true, _, true) => Visibility::PrivateProtected,
            (_, _, true, _) => Visibility::Internal,
            (_, true, _, _) => Visibility::Protected,
            (_, _, _, true) => Visibility::Private,
            _ => Visibility::Default,
        }
    }
}

/// Modifier keywords attached directly to a declaration node.
pub fn modifiers<'a>(node: &Node, source: &'a str) -> Vec<&'a str> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .filter(|child| child.kind() == MODIFIER)
        .map(|child| node_text(&child, source).trim())
        .collect();
    found
}

/// True only for an explicit `public` modifier.
pub fn is_publicly_visible(node: &Node, source: &str) -> bool {
    Visibility::from_modifiers(modifiers(node, source)) == Visibility::Public
}

use std::path::PathBuf;

/// A C# source file parsed by tree-sitter, together with the text the tree
/// points into.
#[derive(Clone, Debug)]
pub struct CSharpAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: Option<PathBuf>,
}

impl CSharpAst {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

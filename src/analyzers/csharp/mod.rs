//! C# source code analysis
//!
//! Discovery of the pieces of a C# file that test scaffolding needs:
//!
//! - namespace declarations (block and file-scoped), fully qualified
//! - non-static `using` directives, including aliases
//! - explicitly `public` classes at any nesting depth, with their
//!   directly-declared `public` methods
//!
//! # Example
//!
//! ```
//! use testgen::analyzers::csharp::CSharpAnalyzer;
//! use testgen::analyzers::Analyzer;
//!
//! let analyzer = CSharpAnalyzer::new().unwrap();
//! let unit = analyzer.discover("public class Foo { public void Bar() {} }").unwrap();
//! assert_eq!(unit.classes[0].name, "Foo");
//! ```

pub mod analyzer;
pub mod parser;
pub mod visibility;
pub mod visitor;

pub use analyzer::CSharpAnalyzer;
pub use visibility::{is_publicly_visible, Visibility};
pub use visitor::extract_source_unit;

/// Tree-sitter node kinds used by the C# grammar.
pub(crate) mod node_kinds {
    pub const COMPILATION_UNIT: &str = "compilation_unit";
    pub const COMMENT: &str = "comment";

    // Namespaces & imports
    pub const NAMESPACE_DECLARATION: &str = "namespace_declaration";
    pub const FILE_SCOPED_NAMESPACE_DECLARATION: &str = "file_scoped_namespace_declaration";
    pub const USING_DIRECTIVE: &str = "using_directive";
    pub const NAME_EQUALS: &str = "name_equals";

    // Types & members
    pub const CLASS_DECLARATION: &str = "class_declaration";
    pub const METHOD_DECLARATION: &str = "method_declaration";
    pub const DECLARATION_LIST: &str = "declaration_list";
    pub const MODIFIER: &str = "modifier";
    pub const IDENTIFIER: &str = "identifier";

    /// Non-class type declarations. Classes nested in them have a type as
    /// their parent.
    pub const TYPE_DECLARATIONS: &[&str] = &[
        "struct_declaration",
        "interface_declaration",
        "record_declaration",
        "record_struct_declaration",
        "enum_declaration",
    ];

    pub const QUALIFIED_NAME: &str = "qualified_name";

    // Anonymous tokens
    pub const STATIC_KEYWORD: &str = "static";
    pub const ALIAS_EQUALS: &str = "=";
    pub const CLASS_KEYWORD: &str = "class";
    pub const NAMESPACE_KEYWORD: &str = "namespace";
    pub const CLOSE_BRACE: &str = "}";

    /// Keywords that open a non-class type inside an error node.
    pub const OTHER_TYPE_KEYWORDS: &[&str] = &["struct", "interface", "record", "enum"];
}

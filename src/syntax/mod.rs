//! Minimal C# syntax model for generated test units.
//!
//! Every node is a fully-specified value. `with_*` methods consume the node
//! and return a new one, so building a unit never mutates shared state and
//! two builds from the same inputs are identical.

pub mod printer;

pub use printer::{LineEnding, PrintOptions, Printer};

use crate::core::{Error, ImportDirective, Result};
use std::fmt;

/// Whether `value` is a C# identifier, optionally `@`-prefixed.
pub fn is_valid_identifier(value: &str) -> bool {
    let body = value.strip_prefix('@').unwrap_or(value);
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(kind: &'static str, value: &str) -> Result<Self> {
        if is_valid_identifier(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(Error::invalid_identifier(kind, value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dotted name such as `App.Models.tempnamespace`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName(Vec<Identifier>);

impl QualifiedName {
    pub fn parse(kind: &'static str, value: &str) -> Result<Self> {
        let segments = value
            .split('.')
            .map(|segment| Identifier::new(kind, segment.trim()))
            .collect::<Result<Vec<_>>>()
            .map_err(|_| Error::invalid_identifier(kind, value))?;
        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[Identifier] {
        &self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: QualifiedName,
}

impl Attribute {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: QualifiedName::parse("attribute", name)?,
        })
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSyntax {
    Void,
}

impl TypeSyntax {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeSyntax::Void => "void",
        }
    }
}

/// A parameterless method with an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    return_type: TypeSyntax,
    name: Identifier,
}

impl MethodDeclaration {
    pub fn new(return_type: TypeSyntax, name: &str) -> Result<Self> {
        Ok(Self {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            return_type,
            name: Identifier::new("method", name)?,
        })
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
    name: Identifier,
    members: Vec<MethodDeclaration>,
}

impl ClassDeclaration {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            name: Identifier::new("class", name)?,
            members: Vec::new(),
        })
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = MethodDeclaration>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn members(&self) -> &[MethodDeclaration] {
        &self.members
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    name: QualifiedName,
    members: Vec<ClassDeclaration>,
}

impl NamespaceDeclaration {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: QualifiedName::parse("namespace", name)?,
            members: Vec::new(),
        })
    }

    pub fn with_member(mut self, member: ClassDeclaration) -> Self {
        self.members.push(member);
        self
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    alias: Option<Identifier>,
    target: QualifiedName,
}

impl UsingDirective {
    pub fn new(target: &str) -> Result<Self> {
        Ok(Self {
            alias: None,
            target: QualifiedName::parse("using", target)?,
        })
    }

    pub fn with_alias(mut self, alias: &str) -> Result<Self> {
        self.alias = Some(Identifier::new("using alias", alias)?);
        Ok(self)
    }
}

impl TryFrom<&ImportDirective> for UsingDirective {
    type Error = Error;

    fn try_from(directive: &ImportDirective) -> Result<Self> {
        let using = UsingDirective::new(&directive.path)?;
        match &directive.alias {
            Some(alias) => using.with_alias(alias),
            None => Ok(using),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilationUnit {
    usings: Vec<UsingDirective>,
    members: Vec<NamespaceDeclaration>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_usings(mut self, usings: impl IntoIterator<Item = UsingDirective>) -> Self {
        self.usings.extend(usings);
        self
    }

    pub fn with_member(mut self, member: NamespaceDeclaration) -> Self {
        self.members.push(member);
        self
    }
}

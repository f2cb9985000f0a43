//! Canonical, whitespace-normalized rendering of a `CompilationUnit`.

use super::{
    Attribute, ClassDeclaration, CompilationUnit, MethodDeclaration, NamespaceDeclaration,
    UsingDirective,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub indent: String,
    pub line_ending: LineEnding,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            line_ending: LineEnding::Lf,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Printer {
    options: PrintOptions,
}

impl Printer {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn print(&self, unit: &CompilationUnit) -> String {
        let mut emitter = Emitter::new(&self.options);
        emitter.unit(unit);
        emitter.out
    }
}

struct Emitter<'a> {
    options: &'a PrintOptions,
    out: String,
    level: usize,
}

impl<'a> Emitter<'a> {
    fn new(options: &'a PrintOptions) -> Self {
        Self {
            options,
            out: String::new(),
            level: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(&self.options.indent);
        }
        self.out.push_str(text);
        self.blank();
    }

    fn blank(&mut self) {
        self.out.push_str(self.options.line_ending.as_str());
    }

    fn open(&mut self) {
        self.line("{");
        self.level += 1;
    }

    fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    fn unit(&mut self, unit: &CompilationUnit) {
        for using in &unit.usings {
            self.using(using);
        }
        for (i, namespace) in unit.members.iter().enumerate() {
            if i > 0 || !unit.usings.is_empty() {
                self.blank();
            }
            self.namespace(namespace);
        }
    }

    fn using(&mut self, using: &UsingDirective) {
        let text = match &using.alias {
            Some(alias) => format!("using {} = {};", alias, using.target),
            None => format!("using {};", using.target),
        };
        self.line(&text);
    }

    fn namespace(&mut self, namespace: &NamespaceDeclaration) {
        self.line(&format!("namespace {}", namespace.name));
        self.open();
        for (i, class) in namespace.members.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.class(class);
        }
        self.close();
    }

    fn attributes(&mut self, attributes: &[Attribute]) {
        for attribute in attributes {
            self.line(&format!("[{}]", attribute.name));
        }
    }

    fn class(&mut self, class: &ClassDeclaration) {
        self.attributes(&class.attributes);
        let mut header = String::new();
        for modifier in &class.modifiers {
            header.push_str(modifier.as_str());
            header.push(' ');
        }
        header.push_str("class ");
        header.push_str(class.name.as_str());
        self.line(&header);

        self.open();
        for (i, method) in class.members.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.method(method);
        }
        self.close();
    }

    fn method(&mut self, method: &MethodDeclaration) {
        self.attributes(&method.attributes);
        let mut header = String::new();
        for modifier in &method.modifiers {
            header.push_str(modifier.as_str());
            header.push(' ');
        }
        header.push_str(method.return_type.as_str());
        header.push(' ');
        header.push_str(method.name.as_str());
        header.push_str("()");
        self.line(&header);
        self.open();
        self.close();
    }
}

use super::framework::FrameworkProfile;
use super::naming::{fixture_name, stub_names};
use super::namespace::derive_namespace;
use crate::core::{ClassDescriptor, GeneratedTest, ImportContext, Result, ResultExt};
use crate::syntax::{
    Attribute, ClassDeclaration, CompilationUnit, MethodDeclaration, Modifier,
    NamespaceDeclaration, PrintOptions, Printer, TypeSyntax, UsingDirective,
};
use tracing::warn;

/// Builds one test unit per discovered class.
///
/// `synthesize` is a pure function of the descriptor and the import
/// context; the synthesizer itself only carries configuration.
#[derive(Debug, Clone, Default)]
pub struct TestUnitSynthesizer {
    framework: FrameworkProfile,
    printer: Printer,
}

impl TestUnitSynthesizer {
    pub fn new(framework: FrameworkProfile, options: PrintOptions) -> Self {
        Self {
            framework,
            printer: Printer::new(options),
        }
    }

    pub fn framework(&self) -> &FrameworkProfile {
        &self.framework
    }

    pub fn synthesize(
        &self,
        class: &ClassDescriptor,
        imports: &ImportContext,
    ) -> Result<GeneratedTest> {
        let namespace_name = derive_namespace(class.namespace.as_deref());
        let unit = self
            .build_unit(class, imports, &namespace_name)
            .context(format!("building fixture for {}", class.name))?;

        Ok(GeneratedTest::new(
            class.name.clone(),
            namespace_name,
            self.printer.print(&unit),
        ))
    }

    fn build_unit(
        &self,
        class: &ClassDescriptor,
        imports: &ImportContext,
        namespace_name: &str,
    ) -> Result<CompilationUnit> {
        // Source directives the builder cannot express (generic alias
        // targets) are dropped; a bad framework import is a config error.
        let mut usings: Vec<UsingDirective> = imports
            .entries()
            .iter()
            .filter_map(|d| match UsingDirective::try_from(d) {
                Ok(using) => Some(using),
                Err(e) => {
                    warn!(directive = %d.path, error = %e, "Skipping unsupported using directive");
                    None
                }
            })
            .collect();
        usings.push(UsingDirective::try_from(imports.framework())?);

        let fixture = self.build_fixture(class)?;
        let namespace = NamespaceDeclaration::new(namespace_name)?.with_member(fixture);

        Ok(CompilationUnit::new()
            .with_usings(usings)
            .with_member(namespace))
    }

    fn build_fixture(&self, class: &ClassDescriptor) -> Result<ClassDeclaration> {
        let test_attribute = Attribute::new(&self.framework.test_attribute)?;
        let stubs = stub_names(&class.methods)
            .iter()
            .map(|name| {
                Ok(MethodDeclaration::new(TypeSyntax::Void, name)?
                    .with_attribute(test_attribute.clone())
                    .with_modifier(Modifier::Public))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassDeclaration::new(&fixture_name(&class.name))?
            .with_attribute(Attribute::new(&self.framework.fixture_attribute)?)
            .with_modifier(Modifier::Public)
            .with_members(stubs))
    }
}

use indoc::indoc;
use pretty_assertions::assert_eq;
use testgen::{
    build_import_context, Analyzer, CSharpAnalyzer, FrameworkProfile, PrintOptions,
    TestFramework, TestGenerator,
};

fn generator() -> TestGenerator {
    TestGenerator::with_defaults().expect("generator")
}

#[test]
fn test_single_class_without_namespace() {
    let generation = generator()
        .generate("public class Foo { public void Bar() {} }")
        .unwrap();

    assert_eq!(generation.tests.len(), 1);
    let test = &generation.tests[0];
    assert_eq!(test.class_name, "Foo");
    assert_eq!(test.namespace_name, "tempnamespace");
    assert_eq!(
        test.generated_unit,
        indoc! {"
            using NUnit.Framework;

            namespace tempnamespace
            {
                [TestFixture]
                public class TestOfFoo
                {
                    [Test]
                    public void Bar_Test()
                    {
                    }
                }
            }
        "}
    );
}

#[test]
fn test_overloads_get_counter_suffix() {
    let source = indoc! {"
        namespace N
        {
            public class C
            {
                public void A() {}
                public void B() {}
                public void A(int x) {}
            }
        }
    "};
    let generation = generator().generate(source).unwrap();
    let test = &generation.tests[0];

    assert_eq!(test.namespace_name, "N.tempnamespace");
    let unit = &test.generated_unit;
    let a = unit.find("public void A_Test()").unwrap();
    let b = unit.find("public void B_Test()").unwrap();
    let a1 = unit.find("public void A_Test1()").unwrap();
    assert!(a < b && b < a1);
    assert_eq!(unit.matches("[Test]").count(), 3);
}

#[test]
fn test_non_public_members_are_excluded() {
    let source = indoc! {"
        public class Visible
        {
            public void Shown() {}
            private void Hidden() {}
            internal void AlsoHidden() {}
            protected internal void StillHidden() {}
        }

        internal class Invisible
        {
            public void Run() {}
        }
    "};
    let generation = generator().generate(source).unwrap();

    let names: Vec<_> = generation.tests.iter().map(|t| t.class_name.as_str()).collect();
    assert_eq!(names, vec!["Visible"]);
    let unit = &generation.tests[0].generated_unit;
    assert!(unit.contains("Shown_Test"));
    assert!(!unit.contains("Hidden_Test"));
    assert!(!unit.contains("StillHidden_Test"));
    assert_eq!(unit.matches("[Test]").count(), 1);
}

#[test]
fn test_every_unit_carries_all_imports() {
    let source = indoc! {"
        using System;
        using System.Collections.Generic;

        namespace App.Core
        {
            public class First { public void Go() {} }
        }

        namespace App.Extra
        {
            using System.Linq;

            public class Second { }
        }
    "};
    let generation = generator().generate(source).unwrap();
    assert_eq!(generation.tests.len(), 2);

    for test in &generation.tests {
        for expected in [
            "using System;",
            "using System.Collections.Generic;",
            "using System.Linq;",
            "using App.Core;",
            "using App.Extra;",
            "using NUnit.Framework;",
        ] {
            assert!(
                test.generated_unit.contains(expected),
                "{} missing from fixture for {}",
                expected,
                test.class_name
            );
        }
        assert_eq!(test.generated_unit.matches("using System;").count(), 1);
    }

    assert_eq!(generation.tests[0].namespace_name, "App.Core.tempnamespace");
    assert_eq!(generation.tests[1].namespace_name, "App.Extra.tempnamespace");
}

#[test]
fn test_source_without_classes_yields_empty() {
    let generation = generator()
        .generate("using System; namespace Empty { }")
        .unwrap();
    assert!(generation.tests.is_empty());
    assert!(generation.failures.is_empty());
}

#[test]
fn test_unparseable_source_yields_none() {
    assert!(generator().generate("}}}}").is_none());
}

#[test]
fn test_generation_is_idempotent() {
    let source = "namespace A { public class B { public void C() {} public void C(int x) {} } }";
    let generator = generator();
    let first = generator.generate(source).unwrap().into_tests();
    let second = generator.generate(source).unwrap().into_tests();
    assert_eq!(first, second);
}

#[test]
fn test_discovery_then_shared_context() {
    let analyzer = CSharpAnalyzer::new().unwrap();
    let unit = analyzer
        .discover("using System; namespace N { public class X {} public class Y {} }")
        .unwrap();
    assert_eq!(unit.classes.len(), 2);

    let context = build_import_context(&unit, "NUnit.Framework");
    let paths: Vec<_> = context.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["System", "N", "NUnit.Framework"]);
}

#[test]
fn test_mstest_profile() {
    let generator = TestGenerator::new(TestFramework::MsTest.profile(), PrintOptions::default())
        .unwrap();
    let test = generator
        .generate("public class Foo { public void Bar() {} }")
        .unwrap()
        .into_tests()
        .remove(0);

    assert!(test
        .generated_unit
        .starts_with("using Microsoft.VisualStudio.TestTools.UnitTesting;\n"));
    assert!(test.generated_unit.contains("[TestClass]"));
    assert!(test.generated_unit.contains("[TestMethod]"));
}

#[test]
fn test_custom_profile_attributes() {
    let profile = FrameworkProfile {
        import: "Xunit".to_string(),
        fixture_attribute: "Collection".to_string(),
        test_attribute: "Fact".to_string(),
    };
    let generator = TestGenerator::new(profile, PrintOptions::default()).unwrap();
    let test = generator
        .generate("public class Foo { public void Bar() {} }")
        .unwrap()
        .into_tests()
        .remove(0);
    assert!(test.generated_unit.contains("[Fact]"));
    assert!(test.generated_unit.contains("using Xunit;"));
}

#[test]
fn test_unclosed_namespace_still_scopes_fixture() {
    let source = indoc! {"
        using System;
        namespace A { public class Foo { public void Bar() {} }
    "};
    let generation = generator().generate(source).unwrap();
    assert_eq!(generation.tests.len(), 1);

    let test = &generation.tests[0];
    assert_eq!(test.namespace_name, "A.tempnamespace");
    assert!(test.generated_unit.contains("using System;"));
    assert!(test.generated_unit.contains("using A;"));
    assert!(test.generated_unit.contains("public void Bar_Test()"));
}

#[test]
fn test_unclosed_class_still_generates_fixture() {
    let generation = generator()
        .generate("public class Foo { public void Bar() {} ")
        .unwrap();
    assert_eq!(generation.tests.len(), 1);
    assert_eq!(generation.tests[0].namespace_name, "tempnamespace");
    assert!(generation.tests[0].generated_unit.contains("public void Bar_Test()"));
}

#[test]
fn test_global_using_printed_as_plain_using() {
    let source = indoc! {"
        global using System;
        using Foo;
        public class C { public void Run() {} }
    "};
    let unit = generator().generate(source).unwrap().into_tests().remove(0).generated_unit;
    assert!(unit.starts_with("using System;\nusing Foo;\n"));
    assert!(!unit.contains("global"));
}

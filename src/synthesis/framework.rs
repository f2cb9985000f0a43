//! Target test framework: the import and marker attributes a fixture needs.

use crate::core::Result;
use crate::syntax::{Attribute, QualifiedName};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    /// NUnit: [TestFixture] / [Test]
    #[default]
    #[value(name = "nunit")]
    NUnit,
    /// MSTest: [TestClass] / [TestMethod]
    #[value(name = "mstest")]
    MsTest,
}

impl TestFramework {
    pub fn profile(&self) -> FrameworkProfile {
        match self {
            TestFramework::NUnit => FrameworkProfile {
                import: "NUnit.Framework".to_string(),
                fixture_attribute: "TestFixture".to_string(),
                test_attribute: "Test".to_string(),
            },
            TestFramework::MsTest => FrameworkProfile {
                import: "Microsoft.VisualStudio.TestTools.UnitTesting".to_string(),
                fixture_attribute: "TestClass".to_string(),
                test_attribute: "TestMethod".to_string(),
            },
        }
    }
}

/// The three framework-specific constants of a generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkProfile {
    pub import: String,
    pub fixture_attribute: String,
    pub test_attribute: String,
}

impl FrameworkProfile {
    /// Check the raw values before anything normalizes them, so a typo in a
    /// config override fails up front instead of printing broken C#.
    pub fn validate(&self) -> Result<()> {
        QualifiedName::parse("framework import", &self.import)?;
        Attribute::new(&self.fixture_attribute)?;
        Attribute::new(&self.test_attribute)?;
        Ok(())
    }
}

impl Default for FrameworkProfile {
    fn default() -> Self {
        TestFramework::default().profile()
    }
}

use crate::synthesis::{FrameworkProfile, TestFramework};
use crate::syntax::{LineEnding, PrintOptions};
use serde::{Deserialize, Serialize};

/// Root configuration structure for testgen (`.testgen.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TestgenConfig {
    /// Target test framework and its marker attributes
    #[serde(default)]
    pub framework: Option<FrameworkConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Ignore patterns
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FrameworkConfig {
    #[serde(default)]
    pub preset: Option<TestFramework>,
    #[serde(default)]
    pub import: Option<String>,
    #[serde(default)]
    pub fixture_attribute: Option<String>,
    #[serde(default)]
    pub test_attribute: Option<String>,
}

impl FrameworkConfig {
    /// Preset values with any explicit overrides applied.
    pub fn resolve(&self, preset_override: Option<TestFramework>) -> FrameworkProfile {
        let preset = preset_override.or(self.preset).unwrap_or_default();
        let base = preset.profile();
        FrameworkProfile {
            import: self.import.clone().unwrap_or(base.import),
            fixture_attribute: self
                .fixture_attribute
                .clone()
                .unwrap_or(base.fixture_attribute),
            test_attribute: self.test_attribute.clone().unwrap_or(base.test_attribute),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_indent")]
    pub indent: String,
    #[serde(default)]
    pub line_ending: LineEnding,
}

fn default_directory() -> String {
    "generated-tests".to_string()
}

fn default_extension() -> String {
    "cs".to_string()
}

fn default_indent() -> String {
    "    ".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            indent: default_indent(),
            line_ending: LineEnding::default(),
        }
    }
}

impl OutputConfig {
    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            indent: self.indent.clone(),
            line_ending: self.line_ending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IgnoreConfig {
    pub patterns: Vec<String>,
}

impl TestgenConfig {
    pub fn framework_profile(&self, preset_override: Option<TestFramework>) -> FrameworkProfile {
        self.framework
            .clone()
            .unwrap_or_default()
            .resolve(preset_override)
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    pub fn ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .as_ref()
            .map(|i| i.patterns.clone())
            .unwrap_or_default()
    }
}

//! discover → build import context → synthesize, for one source file.

use crate::analyzers::csharp::CSharpAnalyzer;
use crate::analyzers::Analyzer;
use crate::core::{Error, GeneratedTest, Result, SourceUnit};
use crate::synthesis::{build_import_context, FrameworkProfile, TestUnitSynthesizer};
use crate::syntax::PrintOptions;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

/// A class whose fixture could not be built. Siblings are unaffected.
#[derive(Debug)]
pub struct SynthesisFailure {
    pub class_name: String,
    pub error: Error,
}

/// Everything generated from one source file.
#[derive(Debug, Default)]
pub struct Generation {
    pub tests: Vec<GeneratedTest>,
    pub failures: Vec<SynthesisFailure>,
}

impl Generation {
    pub fn into_tests(self) -> Vec<GeneratedTest> {
        self.tests
    }
}

/// The whole pipeline. Holds configuration only, so one generator can be
/// shared across threads and files.
#[derive(Debug, Clone)]
pub struct TestGenerator {
    analyzer: CSharpAnalyzer,
    synthesizer: TestUnitSynthesizer,
}

impl TestGenerator {
    pub fn new(framework: FrameworkProfile, options: PrintOptions) -> Result<Self> {
        framework.validate()?;
        Ok(Self {
            analyzer: CSharpAnalyzer::new()?,
            synthesizer: TestUnitSynthesizer::new(framework, options),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(FrameworkProfile::default(), PrintOptions::default())
    }

    pub fn analyzer(&self) -> &CSharpAnalyzer {
        &self.analyzer
    }

    pub fn synthesizer(&self) -> &TestUnitSynthesizer {
        &self.synthesizer
    }

    /// `None` when the source cannot be parsed into a usable unit.
    pub fn generate(&self, source: &str) -> Option<Generation> {
        self.generate_at(source, None)
    }

    pub fn generate_at(&self, source: &str, path: Option<&Path>) -> Option<Generation> {
        let unit = self.analyzer.discover_at(source, path)?;
        Some(self.generate_from_unit(&unit))
    }

    pub fn generate_from_unit(&self, unit: &SourceUnit) -> Generation {
        if unit.is_empty() {
            debug!("No public classes found");
            return Generation::default();
        }

        let imports = build_import_context(unit, &self.synthesizer.framework().import);
        let results: Vec<_> = unit
            .classes
            .par_iter()
            .map(|class| (class, self.synthesizer.synthesize(class, &imports)))
            .collect();

        let mut generation = Generation::default();
        for (class, result) in results {
            match result {
                Ok(test) => generation.tests.push(test),
                Err(error) => {
                    warn!(class = %class.name, error = %error, "Fixture generation failed");
                    generation.failures.push(SynthesisFailure {
                        class_name: class.name.clone(),
                        error,
                    });
                }
            }
        }
        generation
    }
}

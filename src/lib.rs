//! testgen: skeletal unit-test fixtures for C# source files.
//!
//! Each public class in a source file becomes one self-contained compilation
//! unit holding a `TestOf<Class>` fixture with one empty stub per public
//! method. See [`TestGenerator`] for the library entry point.
//!
//! ```
//! use testgen::TestGenerator;
//!
//! let generator = TestGenerator::with_defaults().unwrap();
//! let generation = generator
//!     .generate("public class Foo { public void Bar() {} }")
//!     .unwrap();
//! assert_eq!(generation.tests[0].class_name, "Foo");
//! assert!(generation.tests[0].generated_unit.contains("public void Bar_Test()"));
//! ```

pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod pipeline;
pub mod syntax;
pub mod synthesis;

// Re-export commonly used types
pub use crate::core::{
    ClassDescriptor, Error, GeneratedTest, ImportContext, ImportDirective, Language,
    PublicMethodDescriptor, Result, SourceUnit,
};

pub use crate::analyzers::{csharp::CSharpAnalyzer, get_analyzer, Analyzer};

pub use crate::pipeline::{Generation, SynthesisFailure, TestGenerator};

pub use crate::synthesis::{
    build_import_context, FrameworkProfile, TestFramework, TestUnitSynthesizer,
};

pub use crate::syntax::{LineEnding, PrintOptions};

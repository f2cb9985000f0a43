//! Test unit synthesis
//!
//! Turns discovered classes into generated NUnit/MSTest fixture units:
//!
//! - `naming`: `TestOf<Class>` fixtures and `<Method>_Test[n]` stubs
//! - `namespace`: `<namespace>.tempnamespace` derivation
//! - `imports`: the shared, deduplicated `ImportContext`
//! - `framework`: framework import and marker attributes
//! - `synthesizer`: assembles and prints one unit per class

pub mod framework;
pub mod imports;
pub mod naming;
pub mod namespace;
pub mod synthesizer;

pub use framework::{FrameworkProfile, TestFramework};
pub use imports::build_import_context;
pub use naming::{fixture_name, stub_names, UniqueNamer, FIXTURE_PREFIX, STUB_SUFFIX};
pub use namespace::{derive_namespace, TEMP_NAMESPACE};
pub use synthesizer::TestUnitSynthesizer;

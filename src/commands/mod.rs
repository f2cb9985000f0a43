//! CLI command implementations.
//!
//! - **generate**: scan C# sources and emit one fixture per public class
//! - **init**: write a default `.testgen.toml`

pub mod generate;
pub mod init;

pub use generate::{handle_generate, GenerateConfig, GenerateSummary};
pub use init::init_config;

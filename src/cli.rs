use crate::synthesis::TestFramework;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(about = "Generate NUnit/MSTest fixture skeletons from C# sources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one test fixture per public class
    Generate {
        /// C# files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output directory (defaults to `output.directory` from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Test framework preset, overriding the config file
        #[arg(long, value_enum)]
        framework: Option<TestFramework>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "files")]
        format: OutputFormat,

        /// Configuration file (skips discovery of .testgen.toml)
        #[arg(short, long, env = "TESTGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .testgen.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One file per fixture in the output directory
    Files,
    /// All fixtures as JSON on stdout
    Json,
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Generate { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["testgen", "generate", "src"]).unwrap();
        match cli.command {
            Commands::Generate {
                paths,
                format,
                framework,
                jobs,
                verbosity,
                ..
            } => {
                assert_eq!(paths, vec![PathBuf::from("src")]);
                assert_eq!(format, OutputFormat::Files);
                assert_eq!(framework, None);
                assert_eq!(jobs, 0);
                assert_eq!(verbosity, 0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "testgen",
            "generate",
            "a.cs",
            "b.cs",
            "--framework",
            "mstest",
            "--format",
            "json",
            "-j",
            "2",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.command.verbosity(), 2);
        match cli.command {
            Commands::Generate {
                paths,
                framework,
                format,
                jobs,
                ..
            } => {
                assert_eq!(paths.len(), 2);
                assert_eq!(framework, Some(TestFramework::MsTest));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(jobs, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_requires_path() {
        assert!(Cli::try_parse_from(["testgen", "generate"]).is_err());
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["testgen", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}

use anyhow::Result;
use clap::Parser;
use testgen::cli::{Cli, Commands};
use testgen::commands::generate::GenerateConfig;
use testgen::formatting::FormattingConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Generate {
            paths,
            output,
            framework,
            format,
            config,
            jobs,
            verbosity: _,
            plain,
        } => {
            configure_thread_pool(jobs);
            let generate_config = GenerateConfig {
                paths,
                output,
                framework,
                format,
                config,
                formatting_config: create_formatting_config(plain),
            };
            testgen::commands::handle_generate(generate_config)?;
            Ok(())
        }
        Commands::Init { force } => testgen::commands::init_config(force),
    }
}

// RUST_LOG wins; otherwise each -v raises the level one step from warn
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    // A second init only happens in embedded use; ignore it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// Pure function to map -v count to a level
fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// Configure rayon global thread pool once at startup
fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(get_worker_count(jobs));
    }

    if let Err(e) = builder.build_global() {
        tracing::debug!("Thread pool already configured: {}", e);
    }
}

// Pure function to get worker count
fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

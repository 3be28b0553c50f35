//! URAI CLI - platform-tailored social media captions for images.
//!
//! URAI sends an image to a hosted vision model (Gemini or Groq) with an
//! instruction written for the target platform and prints the caption. The
//! `serve` command runs the same logic behind an HTTP proxy so browser
//! clients never hold provider API keys.
//!
//! # Usage
//!
//! ```bash
//! # Caption an image for Twitter
//! urai describe photo.jpg
//!
//! # Several platforms in turn, with extra context, via Groq
//! urai describe photo.jpg -p instagram -p threads -m groq --context "team offsite"
//!
//! # Run the HTTP proxy
//! urai serve --bind 127.0.0.1:8787
//!
//! # View configuration
//! urai config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;
mod server;

/// URAI - AI-powered social media description generator.
#[derive(Parser, Debug)]
#[command(name = "urai")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "URAI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate platform-tailored descriptions for an image
    Describe(cli::describe::DescribeArgs),

    /// Show the instruction sent for a platform
    Prompt(cli::prompt::PromptArgs),

    /// Demo image generation (returns canned stock images, no inference)
    Imagine(cli::imagine::ImagineArgs),

    /// Run the HTTP proxy for browser clients
    Serve(cli::serve::ServeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match &cli.config {
        Some(path) => urai_core::Config::load_from(path)?,
        None => match urai_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `urai config path`."
                );
                urai_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("URAI v{}", urai_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Describe(args) => cli::describe::execute(args, &config).await,
        Commands::Prompt(args) => cli::prompt::execute(args),
        Commands::Imagine(args) => cli::imagine::execute(args, &config).await,
        Commands::Serve(args) => cli::serve::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args, cli.config.as_deref()),
    }
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "license-header-auditor")]
#[command(about = "Verify that source files start with the required license header")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check license headers under a directory
    Check(CheckArgs),
    /// Write a preset configuration
    Init {
        /// Language preset
        preset: InitPreset,
    },
    /// Show or validate configuration
    Config {
        /// Directory holding .license-header.toml (default: current directory)
        path: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Args)]
pub struct CheckArgs {
    /// Root of the tree to check (default: current directory)
    pub path: Option<PathBuf>,

    /// Configuration file (default: <path>/.license-header.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Required header text, overrides the configuration
    #[arg(long)]
    pub header: Option<String>,

    /// File suffix to check, overrides the configuration (repeatable)
    #[arg(long = "include-suffix")]
    pub include_suffixes: Vec<String>,

    /// File suffix never to check, overrides the configuration (repeatable)
    #[arg(long = "exclude-suffix")]
    pub exclude_suffixes: Vec<String>,

    /// gitignore-style pattern to skip, overrides the configuration (repeatable)
    #[arg(long = "skip-path")]
    pub skip_paths: Vec<String>,

    /// Exit with code 0 even on violations
    #[arg(long)]
    pub exit_zero: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InitPreset {
    Rust,
    Go,
    Python,
}

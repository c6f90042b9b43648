//! Command-line interface definitions for enumforge.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// enumforge - type-safe enum companions for typed Rust constants
#[derive(Parser, Debug)]
#[command(name = "enumforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to enumforge.toml configuration file
    #[arg(short, long, global = true, env = "ENUMFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate companion files for annotated sources
    Generate(GenerateArgs),

    /// Display the enum types found in sources
    Info(InfoArgs),

    /// Initialize a new enumforge.toml configuration file
    Init(InitArgs),
}

// ============================================================================
// Generate Arguments
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Source files or directories (default: `filenames` from the configuration)
    pub files: Vec<PathBuf>,

    /// Make generated `parse` fail on unknown input instead of returning the invalid sentinel
    #[arg(long)]
    pub failfast: bool,

    /// Also accept lower-cased names and aliases
    #[arg(long)]
    pub insensitive: bool,

    /// Companion file suffix (overrides config)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

// ============================================================================
// Info Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Source files or directories (default: `filenames` from the configuration)
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing enumforge.toml if present
    #[arg(short, long)]
    pub force: bool,

    /// Initialize with minimal configuration
    #[arg(long)]
    pub minimal: bool,

    /// Directory to write enumforge.toml into
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

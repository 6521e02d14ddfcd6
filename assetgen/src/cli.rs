//! Command-line interface definitions for assetgen.

use assetgen_core::NamingStyle;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// assetgen - typed Dart accessors for Flutter assets
#[derive(Parser, Debug)]
#[command(name = "assetgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to assetgen.toml configuration file
    #[arg(short, long, global = true, env = "ASSETGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output path override (overrides config file)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Directive for the tracing `EnvFilter` when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn,assetgen=info,assetgen_core=info",
            1 => "info,assetgen=debug,assetgen_core=debug",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the assets directory and write the Dart file (default)
    Generate(GenerateArgs),

    /// Initialize a new assetgen.toml configuration file
    Init(InitArgs),

    /// Display configuration and scanned asset statistics
    Info(InfoArgs),
}

// ============================================================================
// Generate Arguments
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Print the generated source instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Target Flutter version (e.g. 3.16.0), overrides config
    #[arg(long)]
    pub target_version: Option<String>,

    /// Naming style, overrides config
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Root class name, overrides config
    #[arg(long)]
    pub class_name: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Path-qualified class names
    Robust,
    /// Leaf class names, camelCase members
    CamelCase,
    /// Leaf class names, snake_case members
    SnakeCase,
}

impl From<StyleArg> for NamingStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Robust => NamingStyle::Robust,
            StyleArg::CamelCase => NamingStyle::CamelCase,
            StyleArg::SnakeCase => NamingStyle::SnakeCase,
        }
    }
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing assetgen.toml if present
    #[arg(short, long)]
    pub force: bool,

    /// Package name written to [general]
    #[arg(long)]
    pub package_name: Option<String>,
}

// ============================================================================
// Info Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}

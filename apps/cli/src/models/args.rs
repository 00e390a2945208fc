//! # CLI Argument Definitions
//!
//! Command-line flags override every other settings layer.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "histoconf")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Generates plotIt histogram control files")]
pub struct Cli {
    /// Settings file (defaults to an optional `histoconf.toml` in the working directory)
    #[arg(long, global = true, env = "HISTOCONF_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Disable ANSI colors in log output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the control file
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Validate a configuration and report the entry count
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the built-in presets
    Presets {},
    /// Print the composite keys in output order
    Keys {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where the generator configuration comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Built-in preset name
    #[arg(short, long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

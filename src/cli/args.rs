//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Restamp - post-build configuration injection for compiled web builds
#[derive(Parser, Debug)]
#[command(name = "restamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if restamp was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inject the deployment configuration into a compiled build
    #[command(
        name = "inject",
        long_about = "Inject the deployment configuration into a compiled build.\n\n\
            A placeholder build embeds a fixed sentinel configuration in its \
            bundles. This command finds every artifact file carrying the \
            sentinel (in either serialization the toolchain emits), replaces \
            it with the deployment configuration, verifies each rewrite, and \
            reports a summary. Individual file failures are reported but do \
            not fail the run; only an unreadable or malformed deployment \
            configuration does.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Typical container entrypoint usage (defaults for both paths)
    restamp inject

    # Preview what would change without writing anything
    restamp inject --dry-run

    # Non-standard layout
    restamp inject --config deploy/config.json --build-dir dist

COMMON SCENARIOS:
    Nothing was updated and the build is already live:
        restamp scan       # check whether any template artifacts remain"
    )]
    Inject {
        /// Path to the deployment configuration (JSON)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Build output directory to rewrite
        #[arg(long = "build-dir", value_name = "PATH")]
        build_dir: Option<PathBuf>,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List artifact files that still embed the placeholder configuration
    #[command(name = "scan")]
    Scan {
        /// Build output directory to search
        #[arg(long = "build-dir", value_name = "PATH")]
        build_dir: Option<PathBuf>,
    },

    /// Print the placeholder configuration in a serialized form
    #[command(
        name = "placeholder",
        long_about = "Print the placeholder configuration in a serialized form.\n\n\
            Build pipelines embed the JSON form into placeholder builds; \
            printing it from the same binary that later rewrites it keeps \
            the two sides in lockstep."
    )]
    Placeholder {
        /// Which serialized form to print
        #[arg(long, value_enum, value_name = "DIALECT")]
        dialect: Option<DialectArg>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Serialized forms selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// Compact JSON
    Json,
    /// Minified JavaScript object literal
    Js,
}

/// Shells supported for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

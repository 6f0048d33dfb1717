//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Running with no arguments
//! is the same as `rocm-smoke run`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// rocm-smoke - Runtime smoke tests for installed ROCm packages.
#[derive(Debug, Parser)]
#[command(name = "rocm-smoke")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// ROCm installation root; its lib/ and lib64/ are searched first
    #[arg(long, global = true, env = "ROCM_PATH", value_name = "DIR")]
    pub rocm_path: Option<PathBuf>,

    /// Additional directory to search for libraries (repeatable)
    #[arg(long, global = true, value_name = "DIR")]
    pub lib_dir: Vec<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the probes and print a summary (default if no command specified)
    Run(RunArgs),

    /// List probes and whether their libraries can be loaded
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Run only the named probes (comma-separated, e.g. hip,rocblas)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip the named probes (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Also run probes for optional packages (hipFFT, hipSPARSE, hipSOLVER, MIOpen, RCCL)
    #[arg(long)]
    pub extended: bool,

    /// Print the results as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only list the standard probes
    #[arg(long)]
    pub standard_only: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

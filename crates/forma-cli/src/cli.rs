//! CLI argument definitions for the Forma tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "forma",
    version,
    about = "Forma layout designer tools",
    long_about = "Inspect, migrate, and generate code from Forma layout project files.\n\n\
                  Generated source preserves hand-written code between BEGIN/END\n\
                  comment fences across regenerations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize the windows and controls in a project file.
    Info(InfoArgs),

    /// Regenerate host source from a project file.
    Generate(GenerateArgs),

    /// Rewrite a project file in the current framing.
    Rewrite(RewriteArgs),
}

#[derive(Parser)]
pub struct InfoArgs {
    /// Path to the project file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Dump the full design graph as JSON instead of a summary table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the project file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Output source path (default: the project's recorded source path).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Previous generated source to harvest snippets from
    /// (default: the output path, when it exists).
    #[arg(long = "prior", value_name = "PATH")]
    pub prior: Option<PathBuf>,

    /// Print the generated source to stdout instead of writing the file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Fail on unrecognized property tags instead of skipping them.
    #[arg(long = "strict-tags")]
    pub strict_tags: bool,
}

#[derive(Parser)]
pub struct RewriteArgs {
    /// Project file to read (legacy or current framing).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination path for the rewritten file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Fail on unrecognized property tags instead of skipping them.
    #[arg(long = "strict-tags")]
    pub strict_tags: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

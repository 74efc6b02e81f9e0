// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Subcommands:
//
//   process    --pdf FILE                    segment + store
//   summarize  --pdf FILE [--length L]       summary only
//   run        --pdf FILE [--length L]       both, one extraction
//   sections   [--json]                      show stored sections
//   config     [--write FILE]                show / save settings
//
// plus global flags that override the config file.
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive documentation

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::summary::Verbosity;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a PDF, split it into sections and store them
    Process(ProcessArgs),

    /// Extract a PDF and print a summary of it
    Summarize(SummarizeArgs),

    /// Process a PDF and, if --length is given, summarize it too
    Run(RunArgs),

    /// Print the sections stored by the last `process` or `run`
    Sections(SectionsArgs),

    /// Print the resolved configuration, or write it to a file
    Config(ConfigArgs),
}

/// Settings that apply to every subcommand.
/// Anything left unset falls back to the --config file, then
/// to built-in defaults.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite file for stored sections [default: document_data.db]
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Base URL of the summarization endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Summarization model id [default: facebook/bart-large-cnn]
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Bearer token for the summarization endpoint
    #[arg(long, global = true, env = "HF_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Per-request timeout for the summarization endpoint
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

/// Summary length as typed on the command line.
/// Kept separate from Verbosity so clap stays out of Layer 3.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthArg {
    /// Two chunk summaries of 30-60 tokens each
    Short,
    /// Every chunk summarized in 50-150 tokens
    Detailed,
}

impl From<LengthArg> for Verbosity {
    fn from(a: LengthArg) -> Self {
        match a {
            LengthArg::Short    => Verbosity::Short,
            LengthArg::Detailed => Verbosity::Detailed,
        }
    }
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// PDF file to process
    #[arg(long)]
    pub pdf: PathBuf,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// PDF file to summarize
    #[arg(long)]
    pub pdf: PathBuf,

    /// Summary type
    #[arg(long, value_enum, ignore_case = true, default_value_t = LengthArg::Short)]
    pub length: LengthArg,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// PDF file to process
    #[arg(long)]
    pub pdf: PathBuf,

    /// Also summarize, at this length
    #[arg(long, value_enum, ignore_case = true)]
    pub length: Option<LengthArg>,
}

#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Print as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it
    #[arg(long)]
    pub write: Option<PathBuf>,
}

// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// The only layer that prints. It parses arguments, resolves the
// configuration, wires the concrete capabilities (pdf-extract,
// SQLite, the model endpoint) into the use cases, and turns
// every PipelineError into the message the user sees.
//
// A failed action prints its message to stderr and exits with
// a non-zero status; it never panics.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use commands::{Commands, ConfigArgs, GlobalArgs, ProcessArgs, RunArgs, SectionsArgs, SummarizeArgs};

use crate::application::config::AppConfig;
use crate::application::{
    extract_use_case::ExtractUseCase,
    session_use_case::SessionUseCase,
    summarize_use_case::SummarizeUseCase,
};
use crate::data::loader::PdfLoader;
use crate::domain::error::PipelineError;
use crate::domain::section::SectionMap;
use crate::domain::summary::Verbosity;
use crate::domain::traits::TextSummarizer;
use crate::infra::config_file::{load_config, save_config};
use crate::infra::section_store::SqliteSectionStore;
use crate::ml::summarizer::HfSummarizer;

#[derive(Parser, Debug)]
#[command(
    name = "pdf-research",
    version,
    about = "Split PDF documents into sections and summarize them."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the configuration, then dispatch to the subcommand.
    pub fn run(self) -> Result<ExitCode> {
        let cfg = resolve_config(&self.global)?;

        match self.command {
            Commands::Process(args)   => run_process(&cfg, args),
            Commands::Summarize(args) => run_summarize(&cfg, args),
            Commands::Run(args)       => run_session(&cfg, args),
            Commands::Sections(args)  => run_sections(&cfg, args),
            Commands::Config(args)    => run_config(&cfg, args),
        }
    }
}

/// Defaults, then the --config file, then explicit flags.
fn resolve_config(global: &GlobalArgs) -> Result<AppConfig> {
    let mut cfg = match &global.config {
        Some(path) => load_config(path)?,
        None       => AppConfig::default(),
    };

    if let Some(db_path) = &global.db_path {
        cfg.db_path = db_path.clone();
    }
    if let Some(endpoint) = &global.endpoint {
        cfg.summarizer.endpoint = endpoint.clone();
    }
    if let Some(model) = &global.model {
        cfg.summarizer.model = model.clone();
    }
    if let Some(token) = &global.api_token {
        cfg.summarizer.api_token = Some(token.clone());
    }
    if let Some(secs) = global.timeout_secs {
        cfg.summarizer.timeout_secs = secs;
    }

    Ok(cfg)
}

// ─── Subcommands ──────────────────────────────────────────────────────────────

fn run_process(cfg: &AppConfig, args: ProcessArgs) -> Result<ExitCode> {
    session(cfg, &args.pdf, None, None)
}

fn run_summarize(cfg: &AppConfig, args: SummarizeArgs) -> Result<ExitCode> {
    // The model is set up before the document is read, once
    let summarizer = load_summarizer(cfg);

    tracing::info!("Summarizing PDF '{}'", args.pdf.display());
    let document = match ExtractUseCase::new(&PdfLoader::new()).execute(&args.pdf) {
        Ok(document) => document,
        Err(e)       => return Ok(report(&e)),
    };

    let summarizer = summarizer.as_ref().map(|s| s as &dyn TextSummarizer);
    Ok(print_summary(
        SummarizeUseCase::new(summarizer).summarize(&document.text, args.length.into()),
    ))
}

/// Extract once, process, then optionally summarize the same text.
fn run_session(cfg: &AppConfig, args: RunArgs) -> Result<ExitCode> {
    let summarizer = args.length.and_then(|_| load_summarizer(cfg));
    session(cfg, &args.pdf, summarizer.as_ref(), args.length.map(Verbosity::from))
}

fn run_sections(cfg: &AppConfig, args: SectionsArgs) -> Result<ExitCode> {
    let store = SqliteSectionStore::open_read_only(&cfg.db_path)?;

    let Some(sections) = store.map(|s| s.load_all()).transpose()?.flatten() else {
        println!("No document has been processed yet.");
        return Ok(ExitCode::SUCCESS);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
    } else {
        for section in &sections {
            println!("## {}\n{}\n", section.title, section.body);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_config(cfg: &AppConfig, args: ConfigArgs) -> Result<ExitCode> {
    match args.write {
        Some(path) => {
            save_config(&path, cfg)?;
            println!("Configuration written to '{}'", path.display());
        }
        None => {
            let mut shown = cfg.clone();
            if shown.summarizer.api_token.is_some() {
                shown.summarizer.api_token = Some("<redacted>".to_string());
            }
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ─── Shared steps ─────────────────────────────────────────────────────────────

fn session(
    cfg:        &AppConfig,
    pdf:        &Path,
    summarizer: Option<&HfSummarizer>,
    verbosity:  Option<Verbosity>,
) -> Result<ExitCode> {
    tracing::info!("Processing PDF '{}'", pdf.display());

    let mut store = match SqliteSectionStore::open(&cfg.db_path) {
        Ok(store) => store,
        Err(e)    => return Ok(report(&PipelineError::StoreWrite(e.into()))),
    };
    let loader     = PdfLoader::new();
    let summarizer = summarizer.map(|s| s as &dyn TextSummarizer);

    let outcome = match SessionUseCase::new(&loader, &mut store, summarizer).execute(pdf, verbosity) {
        Ok(outcome) => outcome,
        Err(e)      => return Ok(report(&e)),
    };

    tracing::info!("Finished '{}'", outcome.document.source);
    print_processed(cfg, &outcome.sections);
    Ok(match outcome.summary {
        Some(summary) => print_summary(summary),
        None          => ExitCode::SUCCESS,
    })
}

/// Build the summarization client. A failure is shown once and
/// leaves summarization switched off for this run.
fn load_summarizer(cfg: &AppConfig) -> Option<HfSummarizer> {
    match HfSummarizer::load(&cfg.summarizer) {
        Ok(summarizer) => Some(summarizer),
        Err(e) => {
            tracing::warn!("Summarization disabled: {}", e);
            eprintln!("{}", e.user_message());
            None
        }
    }
}

fn print_summary(summary: Result<String, PipelineError>) -> ExitCode {
    match summary {
        Ok(summary) => {
            println!("Summary:\n{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn print_processed(cfg: &AppConfig, sections: &SectionMap) {
    println!(
        "PDF processed successfully! {} sections stored in '{}'.",
        sections.len(),
        cfg.db_path
    );
    for title in sections.titles() {
        println!("  - {title}");
    }
}

/// Log the full error and show the user-facing message.
fn report(err: &PipelineError) -> ExitCode {
    tracing::error!("{}", err);
    eprintln!("{}", err.user_message());
    ExitCode::FAILURE
}

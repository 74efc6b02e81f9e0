// ============================================================
// Layer 2 - SummarizeUseCase
// ============================================================
// Builds one summary for a document's text:
//
//   Step 1: Plan chunks of ≤1024 chars from the first 5000  (Layer 4)
//   Step 2: Summarize each chunk in order                   (Layer 5)
//   Step 3: Join the chunk summaries with a blank line
//
// Short summaries stop after the second chunk; the check runs
// after each summary is added, so exactly two are kept when
// the text has two or more chunks. Detailed summaries cover
// every planned chunk.
//
// One failed chunk fails the whole summary. Summaries already
// collected are dropped, never returned on their own.
//
// The model is passed in as an Option: None means it never
// loaded, and every call fails with ModelUnavailable.

use crate::data::chunker::ChunkPlanner;
use crate::domain::error::PipelineError;
use crate::domain::summary::Verbosity;
use crate::domain::traits::TextSummarizer;

/// Separator between consecutive chunk summaries
pub const SUMMARY_SEPARATOR: &str = "\n\n";

pub struct SummarizeUseCase<'a> {
    summarizer: Option<&'a dyn TextSummarizer>,
    planner:    ChunkPlanner,
}

impl<'a> SummarizeUseCase<'a> {
    pub fn new(summarizer: Option<&'a dyn TextSummarizer>) -> Self {
        Self {
            summarizer,
            planner: ChunkPlanner::default(),
        }
    }

    /// Use different chunking limits
    #[cfg(test)]
    pub fn with_planner(mut self, planner: ChunkPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Summarize `text` at the requested verbosity.
    pub fn summarize(&self, text: &str, verbosity: Verbosity) -> Result<String, PipelineError> {
        let summarizer = self.summarizer.ok_or(PipelineError::ModelUnavailable)?;
        let params     = verbosity.params();
        let limit      = verbosity.chunk_limit();

        let mut summaries: Vec<String> = Vec::new();

        for (i, chunk) in self.planner.plan(text).enumerate() {
            tracing::debug!("Summarizing chunk {} ({} chars, {})", i, chunk.chars().count(), verbosity);

            let summary = summarizer.summarize(chunk, &params).map_err(|e| {
                tracing::error!("Error during summarization of chunk {}: {:#}", i, e);
                PipelineError::Summarization { chunk: i, cause: e.into() }
            })?;
            summaries.push(summary);

            if limit.is_some_and(|n| summaries.len() >= n) {
                break;
            }
        }

        tracing::info!("Built {} summary from {} chunks", verbosity, summaries.len());
        Ok(summaries.join(SUMMARY_SEPARATOR))
    }
}

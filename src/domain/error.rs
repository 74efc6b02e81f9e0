// ============================================================
// Layer 3 - Pipeline Errors
// ============================================================
// Every way a user-triggered action can fail. Each variant is
// terminal for the action that produced it: nothing is retried,
// and the user has to trigger the action again.
//
// The capabilities behind domain::traits report failures with
// anyhow; the use cases wrap them into one of these variants so
// the CLI can pick the right message without string matching.
//
// Reference: thiserror crate documentation

use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Message shown when no summarization model is available.
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
    "Summarization model not available. Please check the setup.";

/// Message shown when any chunk fails to summarize.
/// Partial summaries are never shown.
pub const SUMMARY_FAILED_MESSAGE: &str = "Error generating summary.";

/// Message shown once when the model cannot be initialised.
pub const MODEL_LOAD_MESSAGE: &str =
    "Failed to load models. Please check dependencies or restart the application.";

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The summarization model could not be initialised at startup
    #[error("failed to load summarization model: {0}")]
    ModelLoad(#[source] Cause),

    /// Summarization was requested but no model is configured
    #[error("summarization model not available")]
    ModelUnavailable,

    /// The uploaded file could not be read or parsed
    #[error("failed to read document '{source_name}': {cause}")]
    DocumentRead {
        source_name: String,
        #[source]
        cause: Cause,
    },

    /// The model failed on one chunk; the whole summary is aborted
    #[error("summarization failed on chunk {chunk}: {cause}")]
    Summarization {
        chunk: usize,
        #[source]
        cause: Cause,
    },

    /// Writing the sections to the store failed
    #[error("failed to store sections: {0}")]
    StoreWrite(#[source] Cause),
}

impl PipelineError {
    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::ModelLoad(_)         => MODEL_LOAD_MESSAGE.to_string(),
            PipelineError::ModelUnavailable     => MODEL_UNAVAILABLE_MESSAGE.to_string(),
            PipelineError::Summarization { .. } => SUMMARY_FAILED_MESSAGE.to_string(),
            PipelineError::DocumentRead { .. } | PipelineError::StoreWrite(_) => {
                format!("Error processing PDF: {self}")
            }
        }
    }

    pub(crate) fn document_read(source_name: impl Into<String>, cause: impl Into<Cause>) -> Self {
        PipelineError::DocumentRead {
            source_name: source_name.into(),
            cause:       cause.into(),
        }
    }
}

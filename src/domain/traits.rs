// ============================================================
// Layer 3 - Capability Traits
// ============================================================
// The pipeline talks to three external collaborators, each
// through one narrow trait:
//
//   DocumentSource  → raw PDF bytes to document text
//   SectionStore    → destructive write of a SectionMap
//   TextSummarizer  → one chunk of text to one summary
//
// The application layer only sees these traits, so tests can
// swap in fakes and the real implementations (pdf-extract,
// SQLite, an HTTP model endpoint) stay in Layers 4-6.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::section::SectionMap;
use crate::domain::summary::SummaryParams;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Turns an uploaded file's bytes into document text.
///
/// Implementations:
///   - PdfLoader → extracts per-page text with pdf-extract
pub trait DocumentSource {
    /// Extract the text of `bytes`. `name` is only used to label
    /// the resulting Document and any error.
    fn load(&self, name: &str, bytes: &[u8]) -> Result<Document>;
}

// ─── SectionStore ─────────────────────────────────────────────────────────────
/// Somewhere to keep the sections of the most recent document.
///
/// Implementations:
///   - SqliteSectionStore → a single `document_sections` table
pub trait SectionStore {
    /// Erase everything previously stored, then write `sections`.
    /// Never merges with earlier content.
    fn replace_all(&mut self, sections: &SectionMap) -> Result<()>;
}

// ─── TextSummarizer ───────────────────────────────────────────────────────────
/// A pretrained summarization model behind some interface.
///
/// Implementations:
///   - HfSummarizer → Hugging Face style inference endpoint
pub trait TextSummarizer {
    /// Summarize one chunk within the given length bounds.
    fn summarize(&self, chunk: &str, params: &SummaryParams) -> Result<String>;
}

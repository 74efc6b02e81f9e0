// ============================================================
// Layer 2 - SessionUseCase
// ============================================================
// One full pass over an uploaded PDF, in a fixed order:
//
//   Step 1: Extract the Document                  (ExtractUseCase)
//   Step 2: Segment it and replace the store      (ProcessUseCase)
//   Step 3: Optionally summarize the same text    (SummarizeUseCase)
//
// Step 1 and Step 2 stop the session on failure. A document that
// cannot be read never reaches the store, and a failed store write
// means no summary is attempted.
//
// Step 3 reuses the Document from Step 1; the file is read once.
// Its result is handed back separately so the caller can still
// report the stored sections when only the summary failed.

use std::path::Path;

use super::extract_use_case::ExtractUseCase;
use super::process_use_case::ProcessUseCase;
use super::summarize_use_case::SummarizeUseCase;
use crate::domain::document::Document;
use crate::domain::error::PipelineError;
use crate::domain::section::SectionMap;
use crate::domain::summary::Verbosity;
use crate::domain::traits::{DocumentSource, SectionStore, TextSummarizer};

/// What a session produced once the sections were stored.
#[derive(Debug)]
pub struct SessionOutcome {
    pub document: Document,
    pub sections: SectionMap,

    /// None when no verbosity was requested
    pub summary: Option<Result<String, PipelineError>>,
}

pub struct SessionUseCase<'a> {
    source:     &'a dyn DocumentSource,
    store:      &'a mut dyn SectionStore,
    summarizer: Option<&'a dyn TextSummarizer>,
}

impl<'a> SessionUseCase<'a> {
    pub fn new(
        source:     &'a dyn DocumentSource,
        store:      &'a mut dyn SectionStore,
        summarizer: Option<&'a dyn TextSummarizer>,
    ) -> Self {
        Self { source, store, summarizer }
    }

    /// Run the session for the PDF at `path`.
    /// Summarizes only when `verbosity` is given.
    pub fn execute(
        &mut self,
        path:      &Path,
        verbosity: Option<Verbosity>,
    ) -> Result<SessionOutcome, PipelineError> {
        let document = ExtractUseCase::new(self.source).execute(path)?;
        let sections = ProcessUseCase::new(&mut *self.store).execute(&document)?;

        let summary = verbosity.map(|verbosity| {
            SummarizeUseCase::new(self.summarizer).summarize(&document.text, verbosity)
        });

        Ok(SessionOutcome { document, sections, summary })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::Section;
    use crate::domain::summary::SummaryParams;
    use std::cell::RefCell;
    use std::fs;

    /// Treats the file's bytes as UTF-8 text
    struct PlainTextSource;

    impl DocumentSource for PlainTextSource {
        fn load(&self, name: &str, bytes: &[u8]) -> anyhow::Result<Document> {
            Ok(Document::new(name, String::from_utf8(bytes.to_vec())?))
        }
    }

    struct BrokenSource;

    impl DocumentSource for BrokenSource {
        fn load(&self, _name: &str, _bytes: &[u8]) -> anyhow::Result<Document> {
            anyhow::bail!("not a PDF")
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        current: Option<SectionMap>,
        writes:  usize,
        fail:    bool,
    }

    impl SectionStore for MemoryStore {
        fn replace_all(&mut self, sections: &SectionMap) -> anyhow::Result<()> {
            self.writes += 1;
            if self.fail {
                anyhow::bail!("disk full");
            }
            self.current = Some(sections.clone());
            Ok(())
        }
    }

    /// Records every chunk it is given and answers "summary N"
    #[derive(Default)]
    struct RecordingSummarizer {
        chunks: RefCell<Vec<String>>,
    }

    impl TextSummarizer for RecordingSummarizer {
        fn summarize(&self, chunk: &str, _params: &SummaryParams) -> anyhow::Result<String> {
            let mut chunks = self.chunks.borrow_mut();
            chunks.push(chunk.to_string());
            Ok(format!("summary {}", chunks.len() - 1))
        }
    }

    fn write_pdf(dir: &tempfile::TempDir, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join("paper.pdf");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_unreadable_document_leaves_store_untouched() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, b"Methods\nold run");

        let previous: SectionMap = vec![Section::new("Methods", "old run")].into_iter().collect();
        let mut store = MemoryStore { current: Some(previous.clone()), ..MemoryStore::default() };
        let model     = RecordingSummarizer::default();

        let err = SessionUseCase::new(&BrokenSource, &mut store, Some(&model))
            .execute(&path, Some(Verbosity::Detailed))
            .unwrap_err();

        assert!(matches!(err, PipelineError::DocumentRead { .. }));
        assert_eq!(store.writes, 0);
        assert_eq!(store.current, Some(previous));
        assert!(model.chunks.borrow().is_empty());
    }

    #[test]
    fn test_store_failure_skips_summary() {
        let dir       = tempfile::tempdir().unwrap();
        let path      = write_pdf(&dir, b"Introduction text\nResults\nr1");
        let mut store = MemoryStore { fail: true, ..MemoryStore::default() };
        let model     = RecordingSummarizer::default();

        let err = SessionUseCase::new(&PlainTextSource, &mut store, Some(&model))
            .execute(&path, Some(Verbosity::Short))
            .unwrap_err();

        assert!(matches!(err, PipelineError::StoreWrite(_)));
        assert_eq!(store.writes, 1);
        assert!(model.chunks.borrow().is_empty());
    }

    #[test]
    fn test_summary_uses_the_segmented_text() {
        let dir       = tempfile::tempdir().unwrap();
        let path      = write_pdf(&dir, b"Introduction text\nResults\nr1\nr2");
        let mut store = MemoryStore::default();
        let model     = RecordingSummarizer::default();

        let outcome = SessionUseCase::new(&PlainTextSource, &mut store, Some(&model))
            .execute(&path, Some(Verbosity::Detailed))
            .unwrap();

        assert_eq!(outcome.sections.get("Results"), Some("r1\nr2"));
        assert_eq!(store.current.as_ref(), Some(&outcome.sections));
        assert_eq!(*model.chunks.borrow(), vec![outcome.document.text.clone()]);
        assert_eq!(outcome.summary.unwrap().unwrap(), "summary 0");
    }

    #[test]
    fn test_no_verbosity_means_no_summary() {
        let dir       = tempfile::tempdir().unwrap();
        let path      = write_pdf(&dir, b"just text");
        let mut store = MemoryStore::default();
        let model     = RecordingSummarizer::default();

        let outcome = SessionUseCase::new(&PlainTextSource, &mut store, Some(&model))
            .execute(&path, None)
            .unwrap();

        assert!(outcome.summary.is_none());
        assert_eq!(store.writes, 1);
        assert!(model.chunks.borrow().is_empty());
    }

    #[test]
    fn test_missing_model_fails_summary_but_keeps_sections() {
        let dir       = tempfile::tempdir().unwrap();
        let path      = write_pdf(&dir, b"just text");
        let mut store = MemoryStore::default();

        let outcome = SessionUseCase::new(&PlainTextSource, &mut store, None)
            .execute(&path, Some(Verbosity::Short))
            .unwrap();

        assert_eq!(store.current, Some(outcome.sections));
        assert!(matches!(outcome.summary, Some(Err(PipelineError::ModelUnavailable))));
    }
}

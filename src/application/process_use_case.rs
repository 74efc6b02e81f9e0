// ============================================================
// Layer 2 - ProcessUseCase
// ============================================================
// The upload pipeline after extraction:
//
//   Step 1: Split the document's lines into sections  (Layer 4)
//   Step 2: Replace the stored sections with them     (Layer 6)
//
// The store is replaced wholesale on every run; sections from
// an earlier document are never merged with the new ones.

use crate::data::segmenter::Segmenter;
use crate::domain::document::Document;
use crate::domain::error::PipelineError;
use crate::domain::section::SectionMap;
use crate::domain::traits::SectionStore;

pub struct ProcessUseCase<'a> {
    store:     &'a mut dyn SectionStore,
    segmenter: Segmenter,
}

impl<'a> ProcessUseCase<'a> {
    pub fn new(store: &'a mut dyn SectionStore) -> Self {
        Self {
            store,
            segmenter: Segmenter::new(),
        }
    }

    /// Segment `document` and store the result.
    /// Returns the sections that were written.
    pub fn execute(&mut self, document: &Document) -> Result<SectionMap, PipelineError> {
        let sections = self.segmenter.segment(document.lines());
        tracing::info!("Found {} sections in '{}'", sections.len(), document.source);

        self.store
            .replace_all(&sections)
            .map_err(|e| PipelineError::StoreWrite(e.into()))?;

        Ok(sections)
    }
}

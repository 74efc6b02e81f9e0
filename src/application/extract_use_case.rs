// ============================================================
// Layer 2 - ExtractUseCase
// ============================================================
// The "upload" step: take a file the user pointed at, make sure
// it is a PDF, and turn it into a Document.
//
// Every failure here is a DocumentRead error. Nothing has been
// written yet at this point, so the section store still holds
// whatever the previous run left in it.

use std::{fs, path::Path};

use crate::data::loader::has_pdf_extension;
use crate::domain::document::Document;
use crate::domain::error::PipelineError;
use crate::domain::traits::DocumentSource;

pub struct ExtractUseCase<'a> {
    source: &'a dyn DocumentSource,
}

impl<'a> ExtractUseCase<'a> {
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self { source }
    }

    /// Read and extract the PDF at `path`.
    pub fn execute(&self, path: &Path) -> Result<Document, PipelineError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf")
            .to_string();

        if !has_pdf_extension(path) {
            return Err(PipelineError::document_read(name, "only PDF files are accepted"));
        }

        let bytes = fs::read(path).map_err(|e| PipelineError::document_read(&name, e))?;

        let document = self
            .source
            .load(&name, &bytes)
            .map_err(|e| PipelineError::document_read(&name, e))?;

        tracing::info!(
            "Extracted '{}': {} bytes in, {} chars of text",
            name,
            bytes.len(),
            document.char_count()
        );
        Ok(document)
    }
}

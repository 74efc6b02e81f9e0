// ============================================================
// Layer 4 - PDF Loader
// ============================================================
// Extracts text from PDF bytes using the pdf-extract crate.
//
// pdf-extract can hand back the text page by page. We join the
// pages with a single "\n", which is the shape the segmenter
// and chunk planner expect:
//
//   page 1: "Title\nAbstract\n..."  ┐
//   page 2: "Methods\n..."          ├─ "Title\nAbstract\n...\nMethods\n..."
//   page 3: "..."                   ┘
//
// Scanned (image-only) PDFs come back as empty text rather
// than an error. That is not treated as a failure here; the
// resulting document simply has a single empty line.
//
// Reference: pdf-extract crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::Result;
use std::path::Path;

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads documents from PDF files.
/// Implements the DocumentSource trait from Layer 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfLoader;

impl PdfLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for PdfLoader {
    fn load(&self, name: &str, bytes: &[u8]) -> Result<Document> {
        // pdf-extract panics on some malformed files instead of
        // returning an error, so the panic is turned into one here
        let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|_| anyhow::anyhow!("pdf-extract crashed while parsing '{}'", name))?
            .map_err(|e| anyhow::anyhow!("pdf-extract could not parse '{}': {}", name, e))?;

        let doc = Document::from_pages(name, &pages);
        tracing::debug!(
            "Extracted {} pages ({} chars) from '{}'",
            pages.len(),
            doc.char_count(),
            name
        );
        Ok(doc)
    }
}

/// Case-insensitive check for a ".pdf" extension
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

// ============================================================
// Layer 4 - Text Pipeline
// ============================================================
// Everything between PDF bytes and model-ready text:
//
//   PDF bytes
//       │
//       ▼
//   PdfLoader      → per-page text joined into one Document
//       │
//       ├──────────────────────┐
//       ▼                      ▼
//   Segmenter              ChunkPlanner
//   (lines → sections)     (text → ≤1024-char chunks,
//                           first 5000 chars only)
//
// The two branches are independent: segmentation feeds the
// section store, chunking feeds the summarizer.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Extracts text from PDF files using pdf-extract
pub mod loader;

/// Detects section headers and groups lines under them
pub mod segmenter;

/// Splits text into bounded-length chunks for the summarizer
pub mod chunker;

// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Each use case runs one user-triggered action against the
// capability traits from Layer 3 and returns a typed result.
// None of them print; the CLI decides what the user sees.
//
//   ExtractUseCase   → PDF file to Document
//   ProcessUseCase   → Document to stored sections
//   SummarizeUseCase → Document text to one summary
//   SessionUseCase   → all of the above, in order, for one PDF
//
// Process and summarize are independent: both borrow the same
// in-memory Document, and the summary never reads the store.
//
// Reference: Clean Architecture pattern

// Settings for a run (db path, model endpoint)
pub mod config;

// Reading the uploaded PDF
pub mod extract_use_case;

// Segmenting and storing sections
pub mod process_use_case;

// Chunked summarization
pub mod summarize_use_case;

// Extract, process, then optionally summarize
pub mod session_use_case;

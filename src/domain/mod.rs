// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types and traits describing what the pipeline
// works with. Nothing in here touches the file system, the
// network, SQLite or a PDF parser.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Text extracted from one uploaded PDF
pub mod document;

// Section titles and bodies produced by the segmenter
pub mod section;

// Verbosity and per-chunk length parameters
pub mod summary;

// Typed failures of every pipeline action
pub mod error;

// Capabilities the pipeline depends on
pub mod traits;

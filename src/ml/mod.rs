// ============================================================
// Layer 5 - Model Layer
// ============================================================
// The only layer that knows how the summarization model is
// reached. Everything above it goes through the TextSummarizer
// trait from Layer 3, so the application layer can be tested
// with a fake model and no network.
//
//   summarizer.rs: HfSummarizer, a blocking HTTP client for a
//                   Hugging Face style inference endpoint
//                   (facebook/bart-large-cnn by default)
//
// Reference: reqwest crate documentation

/// Hosted summarization model client
pub mod summarizer;

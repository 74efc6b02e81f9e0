// ============================================================
// Layer 2 - Application Configuration
// ============================================================
// Settings for one run of the tool. Resolved in this order,
// later sources winning:
//
//   1. AppConfig::default()
//   2. a JSON file given with --config (infra::config_file)
//   3. command line flags and HF_API_TOKEN (cli)
//
// Every field has a serde default, so a config file only needs
// the keys it wants to change:
//
//   { "summarizer": { "model": "sshleifer/distilbart-cnn-12-6" } }

use serde::{Deserialize, Serialize};

/// Where the sections table lives unless told otherwise
pub const DEFAULT_DB_PATH: &str = "document_data.db";

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file holding the `document_sections` table
    pub db_path: String,

    pub summarizer: SummarizerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path:    DEFAULT_DB_PATH.to_string(),
            summarizer: SummarizerConfig::default(),
        }
    }
}

/// How to reach the summarization model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Base URL of the inference service
    pub endpoint: String,

    /// Model id, appended as `{endpoint}/models/{model}`
    pub model: String,

    /// Bearer token, if the endpoint needs one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Per-request timeout. Large models on a cold endpoint can
    /// take a while to answer the first chunk.
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint:     DEFAULT_ENDPOINT.to_string(),
            model:        DEFAULT_MODEL.to_string(),
            api_token:    None,
            timeout_secs: 120,
        }
    }
}

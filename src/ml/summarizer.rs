// ============================================================
// Layer 5 - Hugging Face Summarizer
// ============================================================
// Calls a hosted summarization model (BART-large-CNN by default)
// through a Hugging Face style inference endpoint.
//
// One request per chunk:
//
//   POST {endpoint}/models/{model}
//   {
//     "inputs": "<chunk text>",
//     "parameters": { "max_length": 60, "min_length": 30, "do_sample": false }
//   }
//
// and the answer is a one-element array:
//
//   [ { "summary_text": "..." } ]
//
// The client is built once at startup (HfSummarizer::load) and
// then shared by reference for the rest of the session. If the
// build fails the error is reported once and summarization is
// switched off; nothing here retries.
//
// Reference: reqwest crate documentation (blocking client)
//            Lewis et al. (2019) BART

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::application::config::SummarizerConfig;
use crate::domain::error::PipelineError;
use crate::domain::summary::SummaryParams;
use crate::domain::traits::TextSummarizer;

/// Blocking HTTP client for one summarization model.
#[derive(Debug)]
pub struct HfSummarizer {
    client:    reqwest::blocking::Client,
    model_url: Url,
    api_token: Option<String>,
}

/// One element of the endpoint's response array
#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

impl HfSummarizer {
    /// Build the client for the configured model.
    ///
    /// Fails with ModelLoad if the endpoint URL is malformed or
    /// the HTTP client cannot be constructed.
    pub fn load(cfg: &SummarizerConfig) -> Result<Self, PipelineError> {
        let model_url = model_url(&cfg.endpoint, &cfg.model)
            .map_err(|e| PipelineError::ModelLoad(e.into()))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(concat!("pdf-research/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PipelineError::ModelLoad(e.into()))?;

        tracing::info!("Summarization model configured at {}", model_url);
        Ok(Self {
            client,
            model_url,
            api_token: cfg.api_token.clone(),
        })
    }
}

impl TextSummarizer for HfSummarizer {
    fn summarize(&self, chunk: &str, params: &SummaryParams) -> Result<String> {
        let mut request = self
            .client
            .post(self.model_url.clone())
            .json(&request_body(chunk, params));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .with_context(|| format!("Request to '{}' failed", self.model_url))?;

        let status = response.status();
        let body   = response.text().context("Cannot read model response body")?;

        if !status.is_success() {
            bail!("Model endpoint returned {}: {}", status, body.trim());
        }

        parse_response(&body)
    }
}

/// `{endpoint}/models/{model}`, tolerant of a trailing slash
fn model_url(endpoint: &str, model: &str) -> Result<Url> {
    if model.trim().is_empty() {
        bail!("No summarization model configured");
    }
    let base = format!("{}/", endpoint.trim_end_matches('/'));
    let url  = Url::parse(&base)
        .with_context(|| format!("Invalid summarizer endpoint '{endpoint}'"))?
        .join(&format!("models/{model}"))
        .with_context(|| format!("Invalid model id '{model}'"))?;
    Ok(url)
}

fn request_body(chunk: &str, params: &SummaryParams) -> serde_json::Value {
    serde_json::json!({
        "inputs": chunk,
        "parameters": {
            "max_length": params.max_length,
            "min_length": params.min_length,
            "do_sample":  !params.deterministic,
        }
    })
}

fn parse_response(body: &str) -> Result<String> {
    let outputs: Vec<SummaryOutput> = serde_json::from_str(body)
        .with_context(|| format!("Unexpected model response: {}", body.trim()))?;

    outputs
        .into_iter()
        .next()
        .map(|o| o.summary_text)
        .context("Model returned no summary")
}

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{info, warn};
use url::Url;

use crate::actors::traits::RemoteGenerator;
use crate::config::RemoteConfig;
use crate::error::EngineError;
use crate::models::GenerationResult;

/// User-facing text returned when no credential is configured.
const MISSING_KEY_TEXT: &str = "Please provide a Gemini API key to use enhanced AI features.";
const MISSING_KEY_DETAIL: &str = "No API key provided";

/// User-facing text returned when the service rejects or cannot be reached.
const SERVICE_ERROR_TEXT: &str =
    "I encountered an error connecting to my AI services. Please try again later or check your API key.";

/// User-facing text returned when the response body is not in the expected shape.
const FORMAT_ERROR_TEXT: &str =
    "I received an unexpected response format from my AI services. Please try again.";
const FORMAT_ERROR_DETAIL: &str = "Unexpected response format";

/// Placeholder served when the service returns an empty candidate.
const EMPTY_CANDIDATE_TEXT: &str = "I'm not sure how to respond to that.";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Client for the Gemini text-generation service.
///
/// Performs exactly one HTTP attempt per call and never raises service
/// failures to the caller: every outcome is folded into a
/// [`GenerationResult`] so the orchestrator can always fall back locally.
pub struct GeminiClient {
    client: Client,
    config: RemoteConfig,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client from a validated configuration.
    pub fn new(config: RemoteConfig) -> Result<Self, EngineError> {
        let config = config.validated()?;
        let endpoint = config
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", config.model))?;

        Ok(Self {
            client: Client::new(),
            config,
            endpoint,
        })
    }

    /// Creates a client with the production defaults.
    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(RemoteConfig::default())
    }

    fn request_url(&self, credential: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", credential);
        url
    }

    fn build_payload(&self, prompt: &str) -> serde_json::Value {
        let instruction = format!("{}\n\nUser input: {}", self.config.system_instruction, prompt);
        let safety_settings: Vec<serde_json::Value> = SAFETY_CATEGORIES
            .iter()
            .map(|category| json!({ "category": category, "threshold": SAFETY_THRESHOLD }))
            .collect();

        json!({
            "contents": [ { "parts": [ { "text": instruction } ] } ],
            "generationConfig": {
                "temperature": self.config.params.temperature,
                "topP": self.config.params.top_p,
                "topK": self.config.params.top_k,
                "maxOutputTokens": self.config.params.max_output_tokens,
            },
            "safetySettings": safety_settings,
        })
    }
}

#[async_trait]
impl RemoteGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        credential: Option<&str>,
    ) -> Result<GenerationResult, EngineError> {
        let Some(key) = credential else {
            return Ok(GenerationResult::failed(MISSING_KEY_TEXT, MISSING_KEY_DETAIL));
        };

        let payload = self.build_payload(prompt);
        let response = match self
            .client
            .post(self.request_url(key))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Remote generation transport failure: {}", e);
                return Ok(GenerationResult::failed(SERVICE_ERROR_TEXT, e.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<serde_json::Value>().await {
                Ok(body) => body["error"]["message"]
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Error connecting to Gemini API (status {})", status)),
                Err(_) => format!("Error connecting to Gemini API (status {})", status),
            };
            warn!("Remote generation failed with status {}: {}", status, detail);
            return Ok(GenerationResult::failed(SERVICE_ERROR_TEXT, detail));
        }

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Remote generation returned an unreadable body: {}", e);
                return Ok(GenerationResult::failed(FORMAT_ERROR_TEXT, e.to_string()));
            }
        };

        match body["candidates"][0]["content"]["parts"][0]["text"].as_str() {
            Some(text) if !text.is_empty() => {
                info!("Remote generation produced {} bytes", text.len());
                Ok(GenerationResult::ok(text))
            }
            Some(_) => Ok(GenerationResult::ok(EMPTY_CANDIDATE_TEXT)),
            None => Ok(GenerationResult::failed(FORMAT_ERROR_TEXT, FORMAT_ERROR_DETAIL)),
        }
    }
}

//! Engine configuration.
//!
//! All tunables are explicit, validated structures built once at startup and
//! treated as immutable afterwards. The defaults reproduce the production
//! values of the MindfulAI remote generation path.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use crate::error::EngineError;

/// Default endpoint of the Gemini generation service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Fixed system instruction sent with every remote generation request.
pub const SYSTEM_INSTRUCTION: &str = "You are MindfulAI, a mental wellness companion. \
Always respond in a helpful, supportive and educational way about mental health topics.\n\n\
If a user is sharing emotions, suggest coping strategies and empathize with them. \
If they're asking about mental health topics, provide accurate, science-based information.";

/// Generation parameters sent with every remote request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerationParams {
    /// Controls the creativity of the model's responses.
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    /// Nucleus sampling threshold.
    #[validate(range(min = 0.0, max = 1.0))]
    pub top_p: f32,
    /// Top-k sampling cutoff.
    #[validate(range(min = 1))]
    pub top_k: u32,
    /// Upper bound on generated output length.
    #[validate(range(min = 1, max = 8192))]
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

/// Configuration for the remote generation client.
#[derive(Debug, Clone, Validate)]
pub struct RemoteConfig {
    /// Base URL of the generation service.
    pub base_url: Url,
    /// The identifier for the model to be used.
    #[validate(length(min = 1))]
    pub model: String,
    /// The system-level instructions provided to the model for context.
    #[validate(length(min = 1))]
    pub system_instruction: String,
    /// Sampling and length parameters.
    #[validate(nested)]
    pub params: GenerationParams,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default endpoint URL is valid"),
            model: DEFAULT_MODEL.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            params: GenerationParams::default(),
        }
    }
}

impl RemoteConfig {
    /// Builds a configuration against a custom endpoint, keeping the default
    /// model, instruction and parameters.
    pub fn with_base_url(base_url: &str) -> Result<Self, EngineError> {
        let config = Self {
            base_url: Url::parse(base_url)?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration, returning it on success.
    pub fn validated(self) -> Result<Self, EngineError> {
        self.validate()?;
        Ok(self)
    }
}

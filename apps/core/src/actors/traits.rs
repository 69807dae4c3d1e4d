use async_trait::async_trait;

use crate::error::EngineError;
use crate::models::GenerationResult;

/// Defines the public interface for a remote text-generation backend.
///
/// This trait abstracts the specific generation service, allowing different
/// backends (or test doubles with call counters) to be used interchangeably
/// by the orchestrator.
#[async_trait]
pub trait RemoteGenerator: Send + Sync + 'static {
    /// Performs exactly one generation attempt for the given prompt.
    ///
    /// Service-level failures (missing credential, bad status, malformed
    /// body, transport errors) are reported inside the `GenerationResult`,
    /// not as `Err`. The `Err` arm is reserved for faults an implementation
    /// could not absorb; the orchestrator treats it like a reported failure.
    async fn generate(
        &self,
        prompt: &str,
        credential: Option<&str>,
    ) -> Result<GenerationResult, EngineError>;
}

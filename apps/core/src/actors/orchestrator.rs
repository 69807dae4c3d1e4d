use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::actors::traits::RemoteGenerator;
use crate::brain::classifier::IntentClassifier;
use crate::brain::responses::ResponseBank;
use crate::models::EngineReply;

/// Advisory detail used when a failed remote attempt carried no diagnostic.
const REMOTE_FALLBACK_DETAIL: &str =
    "Could not connect to Gemini API. Using fallback responses.";

/// Composes the classifier, the response bank and the remote client into the
/// single `respond` entry point.
///
/// The remote path is only attempted when a credential is present; every
/// remote failure, reported or unexpected, resolves to the local
/// classify-then-select path, which is total by construction.
pub struct ResponseEngine<G: RemoteGenerator> {
    classifier: IntentClassifier,
    bank: ResponseBank,
    remote: Arc<G>,
}

impl<G: RemoteGenerator> ResponseEngine<G> {
    /// Creates an engine with the built-in classifier and response tables.
    pub fn new(remote: G) -> Self {
        Self::with_components(IntentClassifier::new(), ResponseBank::builtin(), remote)
    }

    /// Creates an engine from explicit components.
    pub fn with_components(classifier: IntentClassifier, bank: ResponseBank, remote: G) -> Self {
        Self {
            classifier,
            bank,
            remote: Arc::new(remote),
        }
    }

    /// Produces one reply for one user input.
    ///
    /// # Arguments
    ///
    /// * `user_text` - The raw user input.
    /// * `credential` - The session's remote credential, if any. Absence is a
    ///   routing condition, not an error.
    #[instrument(skip(self, user_text, credential))]
    pub async fn respond(&self, user_text: &str, credential: Option<&str>) -> EngineReply {
        if let Some(key) = credential {
            match self.remote.generate(user_text, Some(key)).await {
                Ok(result) if result.success => {
                    info!("Remote generation succeeded");
                    return EngineReply {
                        reply_text: result.text,
                        used_remote: true,
                        remote_error_detail: None,
                    };
                }
                Ok(result) => {
                    let detail = result
                        .error_detail
                        .unwrap_or_else(|| REMOTE_FALLBACK_DETAIL.to_string());
                    warn!("Remote generation failed, using local fallback: {}", detail);
                    return EngineReply {
                        reply_text: self.local_reply(user_text),
                        used_remote: false,
                        remote_error_detail: Some(detail),
                    };
                }
                Err(e) => {
                    error!("Unexpected remote generation error, using local fallback: {}", e);
                    return EngineReply {
                        reply_text: self.local_reply(user_text),
                        used_remote: false,
                        remote_error_detail: Some(e.to_string()),
                    };
                }
            }
        }

        EngineReply {
            reply_text: self.local_reply(user_text),
            used_remote: false,
            remote_error_detail: None,
        }
    }

    /// The guaranteed local path: classify, then select a candidate.
    fn local_reply(&self, user_text: &str) -> String {
        let category = self.classifier.classify(user_text);
        info!("Classified input as {}", category);
        self.bank.select_reply(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::classifier::Category;
    use crate::error::EngineError;
    use crate::models::GenerationResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Counts calls and replays a canned outcome.
    struct MockGenerator {
        calls: AtomicUsize,
        response: Mutex<Result<GenerationResult, EngineError>>,
    }

    impl MockGenerator {
        fn new(response: Result<GenerationResult, EngineError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Mutex::new(response),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RemoteGenerator for MockGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _credential: Option<&str>,
        ) -> Result<GenerationResult, EngineError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn test_absent_credential_never_calls_remote() {
        let engine = ResponseEngine::new(MockGenerator::new(Ok(GenerationResult::ok("unused"))));

        let reply = engine.respond("hello", None).await;

        assert!(!reply.reply_text.is_empty());
        assert!(!reply.used_remote);
        assert!(reply.remote_error_detail.is_none());
        assert_eq!(engine.remote.call_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_success_is_used_verbatim() {
        let engine =
            ResponseEngine::new(MockGenerator::new(Ok(GenerationResult::ok("remote says hi"))));

        let reply = engine.respond("hello", Some("key")).await;

        assert_eq!(reply.reply_text, "remote says hi");
        assert!(reply.used_remote);
        assert!(reply.remote_error_detail.is_none());
        assert_eq!(engine.remote.call_count(), 1);
    }

    #[tokio::test]
    async fn test_reported_failure_falls_back_locally() {
        let engine = ResponseEngine::new(MockGenerator::new(Ok(GenerationResult::failed(
            "safe text",
            "status 503",
        ))));

        let reply = engine.respond("hello", Some("key")).await;

        assert!(!reply.used_remote);
        assert!(!reply.reply_text.is_empty());
        assert_eq!(reply.remote_error_detail.as_deref(), Some("status 503"));
    }

    #[tokio::test]
    async fn test_unexpected_error_is_absorbed() {
        let engine = ResponseEngine::new(MockGenerator::new(Err(EngineError::Internal(
            "mock blew up".to_string(),
        ))));

        let reply = engine.respond("hello", Some("key")).await;

        assert!(!reply.used_remote);
        assert!(!reply.reply_text.is_empty());
        assert!(reply
            .remote_error_detail
            .as_deref()
            .unwrap()
            .contains("mock blew up"));
    }

    #[tokio::test]
    async fn test_local_reply_comes_from_the_classified_set() {
        let engine = ResponseEngine::new(MockGenerator::new(Ok(GenerationResult::ok("unused"))));

        let reply = engine.respond("hello", None).await;

        let greetings = engine.bank.candidates(Category::Greeting);
        assert!(greetings.contains(&reply.reply_text));
    }
}

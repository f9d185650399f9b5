// Public modules
pub mod api;

// Internal imports
use crate::requests::completion::{
    error::CompletionError, request::CompletionRequest, response::CompletionResponse,
};

/// Anything that can turn one prompt into one completion.
///
/// `GeminiBackend` is the production implementation. The relay only depends on this
/// trait, so callers can swap in their own generator.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, CompletionError>;

    fn model_id(&self) -> &str;
}

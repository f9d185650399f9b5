mod req;
mod res;

pub use req::{Content, GeminiCompletionRequest, GenerationConfig, Part};
pub use res::{Candidate, GeminiCompletionResponse, PromptFeedback, UsageMetadata};

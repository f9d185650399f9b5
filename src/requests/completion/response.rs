use super::error::CompletionError;
use crate::llms::api::gemini::completion::GeminiCompletionResponse;

#[derive(Clone, Debug)]
pub struct CompletionResponse {
    /// The generated completion, exactly as the model returned it.
    pub content: String,
    pub finish_reason: Option<String>,
    pub model_version: Option<String>,
    pub token_usage: TokenUsage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl CompletionResponse {
    /// Wraps text from a generator that has no envelope of its own.
    pub fn from_text<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            finish_reason: None,
            model_version: None,
            token_usage: TokenUsage::default(),
        }
    }

    pub(crate) fn new_from_gemini(
        res: GeminiCompletionResponse,
    ) -> crate::Result<Self, CompletionError> {
        let candidate = match res.candidates.first() {
            Some(candidate) => candidate,
            None => {
                return match res.prompt_feedback.and_then(|f| f.block_reason) {
                    Some(reason) => Err(CompletionError::PromptBlocked(reason)),
                    None => Err(CompletionError::ReponseContentEmpty),
                };
            }
        };
        if candidate.is_blocked() {
            return Err(CompletionError::CandidateBlocked(
                candidate.finish_reason.clone().unwrap_or_default(),
            ));
        }

        let token_usage = res
            .usage_metadata
            .as_ref()
            .map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_token_count,
                completion_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            })
            .unwrap_or_default();

        Ok(Self {
            content: candidate.text(),
            finish_reason: candidate.finish_reason.clone(),
            model_version: res.model_version.clone(),
            token_usage,
        })
    }
}

impl std::fmt::Display for CompletionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "CompletionResponse:")?;
        writeln!(f, "    content: {:?}", self.content)?;
        writeln!(f, "    finish_reason: {:?}", self.finish_reason)?;
        writeln!(f, "    model_version: {:?}", self.model_version)?;
        write!(
            f,
            "    token_usage: prompt {}, completion {}, total {}",
            self.token_usage.prompt_tokens,
            self.token_usage.completion_tokens,
            self.token_usage.total_tokens
        )
    }
}

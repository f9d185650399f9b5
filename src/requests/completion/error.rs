#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("RequestBuilderError: {0}")]
    RequestBuilderError(String),
    #[error("ClientError: {0}")]
    ClientError(#[from] crate::llms::api::ClientError),
    #[error("PromptBlocked: {0}")]
    PromptBlocked(String),
    #[error("CandidateBlocked: finish reason {0}")]
    CandidateBlocked(String),
    #[error("ReponseContentEmpty: Response had no content")]
    ReponseContentEmpty,
}

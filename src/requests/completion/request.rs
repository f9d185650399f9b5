/// Generation settings forwarded to the backend. `None` leaves the model default in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

/// One prompt, one non-streaming completion.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub config: RequestConfig,
}

impl CompletionRequest {
    pub fn new<S: Into<String>>(prompt: S) -> Self {
        Self {
            prompt: prompt.into(),
            config: RequestConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RequestConfig) -> Self {
        self.config = config;
        self
    }
}

#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod insights;
pub mod llms;
pub mod logging;
pub mod requests;

pub use insights::{
    telemetry::{ChatRole, ChatTurn, GpuInfo, MemoryUsage, NetworkMetrics, Reading, SystemContext},
    InsightRelay,
};
pub use llms::{
    api::{
        gemini::{
            builder::{GeminiBackendBuilder, GeminiModelTrait},
            GeminiBackend, GeminiConfig, DEFAULT_GEMINI_MODEL,
        },
        ApiConfig, ApiError, ClientError, LlmApiConfigTrait,
    },
    TextGenerator,
};
pub use logging::{LoggingConfig, LoggingConfigTrait};
pub use requests::completion::{
    error::CompletionError,
    request::{CompletionRequest, RequestConfig},
    response::{CompletionResponse, TokenUsage},
};

pub struct PxMonitorLlm {}

impl PxMonitorLlm {
    /// Starts building a Gemini backend. Call `init()` on the builder to get the shared client handle.
    pub fn gemini() -> GeminiBackendBuilder {
        GeminiBackendBuilder::default()
    }
}

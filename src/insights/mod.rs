//! The relay between PXMonitor's dashboards and the text generator.
//!
//! Each operation renders one prompt, makes one completion request and returns the
//! generated text untouched. Any failure is logged and replaced by a fixed,
//! operation-specific sentence, so callers always get a displayable string.

pub mod prompts;
pub mod telemetry;

use crate::{
    llms::TextGenerator,
    requests::completion::request::{CompletionRequest, RequestConfig},
};
use serde::Serialize;
use std::sync::Arc;
use telemetry::{ChatTurn, NetworkMetrics, SystemContext};

pub const METRICS_FALLBACK: &str = "Failed to analyze network metrics. Please try again later.";
pub const SYSTEM_QUESTION_FALLBACK: &str =
    "Failed to analyze your question. Please try again later.";
pub const CONNECTIONS_FALLBACK: &str = "Failed to analyze connections due to an error.";

pub fn component_fallback(component_name: &str) -> String {
    format!("Failed to get explanation for {component_name}. Please try again later.")
}

pub fn hostname_fallback(hostname: &str) -> String {
    format!("Failed to get an explanation for {hostname}.")
}

#[derive(Clone)]
pub struct InsightRelay {
    generator: Arc<dyn TextGenerator>,
    request_config: RequestConfig,
}

impl InsightRelay {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            request_config: RequestConfig::default(),
        }
    }

    /// Generation settings applied to every request made through this relay.
    pub fn with_request_config(mut self, request_config: RequestConfig) -> Self {
        self.request_config = request_config;
        self
    }

    pub fn model_id(&self) -> &str {
        self.generator.model_id()
    }

    pub async fn explain_component(&self, component_name: &str) -> String {
        let prompt = prompts::explain_component(component_name);
        self.relay("explain_component", prompt)
            .await
            .unwrap_or_else(|| component_fallback(component_name))
    }

    pub async fn analyze_metrics(&self, metrics: &NetworkMetrics) -> String {
        let prompt = prompts::analyze_metrics(metrics);
        self.relay("analyze_metrics", prompt)
            .await
            .unwrap_or_else(|| METRICS_FALLBACK.to_string())
    }

    /// `history` may be empty; it is rendered oldest first.
    pub async fn ask_system_question(
        &self,
        question: &str,
        context: &SystemContext,
        history: &[ChatTurn],
    ) -> String {
        let prompt = prompts::ask_system_question(question, context, history);
        self.relay("ask_system_question", prompt)
            .await
            .unwrap_or_else(|| SYSTEM_QUESTION_FALLBACK.to_string())
    }

    /// Only the first [`prompts::MAX_CONNECTIONS_ANALYZED`] records are sent. The
    /// risk-level format is requested from the model, not checked here.
    pub async fn analyze_connections_for_security<T: Serialize + Sync>(
        &self,
        connections: &[T],
    ) -> String {
        let prompt = match prompts::analyze_connections(connections) {
            Ok(prompt) => prompt,
            Err(e) => {
                crate::error!(
                    operation = "analyze_connections_for_security",
                    error = %e,
                    "Prompt not built; returning fallback"
                );
                return CONNECTIONS_FALLBACK.to_string();
            }
        };
        self.relay("analyze_connections_for_security", prompt)
            .await
            .unwrap_or_else(|| CONNECTIONS_FALLBACK.to_string())
    }

    pub async fn explain_hostname(&self, hostname: &str) -> String {
        let prompt = prompts::explain_hostname(hostname);
        self.relay("explain_hostname", prompt)
            .await
            .unwrap_or_else(|| hostname_fallback(hostname))
    }

    /// Sends the prompt and returns the completion text, or `None` after logging the failure.
    async fn relay(&self, operation: &'static str, prompt: String) -> Option<String> {
        crate::debug!(operation, prompt_len = prompt.len(), "Relaying prompt");
        let request = CompletionRequest::new(prompt).with_config(self.request_config.clone());
        match self.generator.completion_request(&request).await {
            Ok(response) => {
                crate::debug!(
                    operation,
                    total_tokens = response.token_usage.total_tokens,
                    "Completion received"
                );
                Some(response.content)
            }
            Err(e) => {
                crate::error!(operation, error = %e, "Completion failed; returning fallback");
                None
            }
        }
    }
}

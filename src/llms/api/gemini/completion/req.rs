use crate::requests::completion::{error::CompletionError, request::CompletionRequest};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCompletionRequest {
    /// The content of the current conversation with the model.
    ///
    /// Every relay operation sends exactly one user turn.
    pub contents: Vec<Content>,

    /// Configuration options for model generation and outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Shared with the response side, which reads the model's reply in the same shape.
#[derive(Clone, Serialize, Debug, Deserialize)]
pub struct Content {
    /// `user` or `model`. Optional in responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Serialize, Debug, Deserialize)]
pub struct Part {
    /// Parts carrying non-text data deserialize with `text: None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always 1: the relay never asks for alternatives.
    pub candidate_count: u32,

    /// Maximum number of tokens to include in a candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// min: 0.0, max: 2.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// min: 0.0, max: 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl GeminiCompletionRequest {
    pub fn new(req: &CompletionRequest) -> crate::Result<Self, CompletionError> {
        let config = &req.config;
        let generation_config = if config.temperature.is_none()
            && config.top_p.is_none()
            && config.max_output_tokens.is_none()
        {
            None
        } else {
            Some(GenerationConfig {
                candidate_count: 1,
                max_output_tokens: max_output_tokens(config.max_output_tokens)?,
                temperature: temperature(config.temperature)?,
                top_p: top_p(config.top_p)?,
            })
        };

        Ok(GeminiCompletionRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(req.prompt.clone()),
                }],
            }],
            generation_config,
        })
    }
}

fn temperature(value: Option<f32>) -> crate::Result<Option<f32>, CompletionError> {
    match value {
        Some(v) if !(0.0..=2.0).contains(&v) => Err(CompletionError::RequestBuilderError(
            "Temperature must be between 0.0 and 2.0".to_string(),
        )),
        _ => Ok(value),
    }
}

fn top_p(value: Option<f32>) -> crate::Result<Option<f32>, CompletionError> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => Err(CompletionError::RequestBuilderError(
            "Top p must be between 0.0 and 1.0".to_string(),
        )),
        _ => Ok(value),
    }
}

fn max_output_tokens(value: Option<u32>) -> crate::Result<Option<u32>, CompletionError> {
    match value {
        Some(0) => Err(CompletionError::RequestBuilderError(
            "Max output tokens must be greater than 0".to_string(),
        )),
        _ => Ok(value),
    }
}

use super::{GeminiBackend, GeminiConfig, DEFAULT_GEMINI_MODEL};
use crate::{
    llms::api::config::{ApiConfig, LlmApiConfigTrait},
    logging::{LoggingConfig, LoggingConfigTrait},
};

pub struct GeminiBackendBuilder {
    pub config: GeminiConfig,
    pub model_id: String,
}

impl Default for GeminiBackendBuilder {
    fn default() -> Self {
        Self {
            config: Default::default(),
            model_id: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl GeminiBackendBuilder {
    pub fn init(self) -> crate::Result<std::sync::Arc<GeminiBackend>> {
        Ok(std::sync::Arc::new(GeminiBackend::new(
            self.config,
            &self.model_id,
        )?))
    }
}

impl LlmApiConfigTrait for GeminiBackendBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl GeminiModelTrait for GeminiBackendBuilder {
    fn model(&mut self) -> &mut String {
        &mut self.model_id
    }
}

impl LoggingConfigTrait for GeminiBackendBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}

pub trait GeminiModelTrait {
    fn model(&mut self) -> &mut String;

    /// Set the model using the model_id string. Model ids are lowercase on the API,
    /// so `gemini-1.5-Flash` and `gemini-1.5-flash` select the same model.
    fn model_id<S: AsRef<str>>(mut self, model_id: S) -> Self
    where
        Self: Sized,
    {
        *self.model() = model_id.as_ref().trim().to_ascii_lowercase();
        self
    }

    fn gemini_1_5_flash(mut self) -> Self
    where
        Self: Sized,
    {
        *self.model() = "gemini-1.5-flash".to_string();
        self
    }

    fn gemini_1_5_pro(mut self) -> Self
    where
        Self: Sized,
    {
        *self.model() = "gemini-1.5-pro".to_string();
        self
    }

    fn gemini_2_0_flash(mut self) -> Self
    where
        Self: Sized,
    {
        *self.model() = "gemini-2.0-flash".to_string();
        self
    }
}

pub mod builder;
pub mod completion;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait, DEFAULT_REQUEST_TIMEOUT},
    error::ClientError,
};
use crate::{
    llms::TextGenerator,
    logging::LoggingConfig,
    requests::completion::{
        error::CompletionError, request::CompletionRequest, response::CompletionResponse,
    },
};
use completion::{GeminiCompletionRequest, GeminiCompletionResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, Secret};

/// Default Generative Language API host
pub const GEMINI_API_HOST: &str = "https://generativelanguage.googleapis.com";
/// Stable REST version path
pub const GEMINI_API_VERSION_PATH: &str = "/v1beta";
/// Header carrying the api key. Keeps the key out of request URLs and their logs.
pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";
/// The one model every relay operation talks to unless the builder overrides it.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

pub struct GeminiBackend {
    pub(crate) client: ApiClient<GeminiConfig>,
    pub model_id: String,
}

impl GeminiBackend {
    pub fn new(mut config: GeminiConfig, model_id: &str) -> crate::Result<Self> {
        config.logging_config.load_logger();
        let api_key = config.api_config.load_api_key()?;
        // Surface an unusable key at startup rather than on the first request.
        HeaderValue::from_str(api_key.expose_secret())
            .map_err(|_| crate::anyhow!("api_key is not a valid header value"))?;
        config.api_config.api_key = Some(api_key);
        crate::debug!(model_id, host = %config.api_config.base_url(), "Gemini backend ready");
        Ok(Self {
            client: ApiClient::new(config)?,
            model_id: model_id.to_owned(),
        })
    }

    pub(crate) async fn generate_content(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, CompletionError> {
        let path = format!("/models/{}:generateContent", self.model_id);
        let gemini_request = GeminiCompletionRequest::new(request)?;
        match self
            .client
            .post::<_, GeminiCompletionResponse>(&path, gemini_request)
            .await
        {
            Err(e) => Err(CompletionError::ClientError(e)),
            Ok(res) => CompletionResponse::new_from_gemini(res),
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiBackend {
    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, CompletionError> {
        self.generate_content(request).await
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: GEMINI_API_HOST.to_string(),
                port: None,
                base_path: GEMINI_API_VERSION_PATH.to_string(),
                api_key: None,
                api_key_env_var: "GEMINI_API_KEY".to_string(),
                timeout: DEFAULT_REQUEST_TIMEOUT,
            },
            logging_config: LoggingConfig {
                logger_name: "gemini".to_string(),
                ..Default::default()
            },
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ApiConfigTrait for GeminiConfig {
    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = self.api_key() {
            let mut value = HeaderValue::from_str(api_key.expose_secret()).map_err(|_| {
                ClientError::InvalidArgument("api_key is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(GEMINI_API_KEY_HEADER), value);
        }
        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_config.base_url(), path)
    }

    fn api_key(&self) -> &Option<Secret<String>> {
        &self.api_config.api_key
    }

    fn timeout(&self) -> std::time::Duration {
        self.api_config.timeout
    }
}

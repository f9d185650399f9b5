use super::error::ClientError;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Scheme and host, e.g. `https://generativelanguage.googleapis.com`.
    pub host: String,
    pub port: Option<String>,
    /// Path prefix appended after host and port, e.g. `/v1beta`.
    pub base_path: String,
    pub api_key: Option<Secret<String>>,
    pub api_key_env_var: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub(crate) fn load_api_key(&self) -> crate::Result<Secret<String>> {
        let api_key = if let Some(api_key) = self.api_key.as_ref() {
            crate::trace!("Using api_key from parameter");
            api_key.to_owned()
        } else {
            crate::trace!("api_key not set. Attempting to load from .env");
            dotenvy::dotenv().ok();

            match dotenvy::var(&self.api_key_env_var) {
                Ok(api_key) => {
                    crate::trace!("Successfully loaded api_key from .env");
                    Secret::new(api_key)
                }
                Err(_) => {
                    crate::trace!(
                        "{} not found in dotenv, nor was it set manually",
                        self.api_key_env_var
                    );
                    crate::bail!("Failed to load api_key from parameter or .env")
                }
            }
        };
        if api_key.expose_secret().trim().is_empty() {
            crate::bail!("api_key is empty")
        }
        Ok(api_key)
    }

    pub(crate) fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        match &self.port {
            Some(port) => format!("{host}:{port}{}", self.base_path),
            None => format!("{host}{}", self.base_path),
        }
    }
}

pub trait LlmApiConfigTrait {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig;

    fn api_config(&self) -> &ApiConfig;

    fn with_api_host<S: AsRef<str>>(mut self, host: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().host = host.as_ref().to_string();
        self
    }

    fn with_api_port<S: AsRef<str>>(mut self, port: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().port = Some(port.as_ref().to_string());
        self
    }

    fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().api_key = Some(Secret::from(api_key.into()));
        self
    }

    /// Set the environment variable name for the API key. Default is set from the backend.
    fn with_api_key_env_var<S: Into<String>>(mut self, api_key_env_var: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().api_key_env_var = api_key_env_var.into();
        self
    }

    /// Upper bound for a single request, connect through body. Defaults to 60 seconds.
    fn with_timeout(mut self, timeout: Duration) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().timeout = timeout;
        self
    }
}

pub(crate) trait ApiConfigTrait {
    fn headers(&self) -> Result<HeaderMap, ClientError>;

    fn url(&self, path: &str) -> String;

    fn api_key(&self) -> &Option<Secret<String>>;

    fn timeout(&self) -> Duration;
}

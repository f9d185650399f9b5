use super::{
    config::ApiConfigTrait,
    error::{map_deserialization_error, map_serialization_error, ClientError, WrappedError},
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub(crate) struct ApiClient<C: ApiConfigTrait> {
    http_client: reqwest::Client,
    pub config: C,
}

impl<C: ApiConfigTrait> ApiClient<C> {
    pub fn new(config: C) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Make a POST request to {path} and deserialize the response body
    pub(crate) async fn post<I, O>(&self, path: &str, request: I) -> Result<O, ClientError>
    where
        I: Serialize + std::fmt::Debug,
        O: DeserializeOwned,
    {
        let serialized_request =
            serde_json::to_string(&request).map_err(map_serialization_error)?;
        crate::trace!("Serialized request: {}", serialized_request);
        let request = self
            .http_client
            .post(self.config.url(path))
            .headers(self.config.headers()?)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serialized_request)
            .build()?;
        self.execute(request).await
    }

    /// Execute a HTTP request once. Non-success statuses are mapped to the API's error object.
    async fn execute_raw(&self, request: reqwest::Request) -> Result<Bytes, ClientError> {
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        // Deserialize response body from either error object or actual response object
        if !status.is_success() {
            return match serde_json::from_slice::<WrappedError>(bytes.as_ref()) {
                Ok(wrapped_error) => Err(ClientError::ApiError(wrapped_error.error)),
                Err(_) if status.as_u16() == 503 => Err(ClientError::ServiceUnavailable {
                    message: String::from_utf8_lossy(&bytes).into_owned(),
                }),
                Err(_) => Err(ClientError::GenericError {
                    message: format!(
                        "status {}: {}",
                        status.as_u16(),
                        String::from_utf8_lossy(&bytes)
                    ),
                }),
            };
        }

        Ok(bytes)
    }

    async fn execute<O>(&self, request: reqwest::Request) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let bytes = self.execute_raw(request).await?;

        // Deserialize once into a generic Value
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))?;

        // Log the pretty-printed JSON
        let pretty_json = serde_json::to_string_pretty(&value).map_err(map_serialization_error)?;
        crate::trace!("Serialized response: {}", pretty_json);

        // Convert the Value into the target type
        let response: O =
            serde_json::from_value(value).map_err(|e| map_deserialization_error(e, &bytes))?;

        Ok(response)
    }
}

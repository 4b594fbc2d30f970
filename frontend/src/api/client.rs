use reqwest::{header, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Performs one request against `{base_url}{endpoint}` and returns the
    /// parsed JSON body. The body is parsed whatever the status; non-2xx
    /// statuses become an [`ApiError`] carrying the backend's message.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut builder = self
            .client
            .request(method, format!("{}{}", base_url, endpoint))
            .header(header::CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder.build().map_err(ApiError::network)?;

        let (status, text) = self.execute(request).await?;
        let parsed: Value = serde_json::from_str(&text).map_err(ApiError::network)?;

        if status.is_success() {
            Ok(parsed)
        } else {
            Err(ApiError::from_response(status.as_u16(), parsed))
        }
    }

    pub async fn request_json<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.request(method, endpoint, query, body).await?;
        serde_json::from_value(value).map_err(ApiError::network)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request_json::<T, Value>(Method::GET, endpoint, query, None)
            .await
    }

    async fn execute(&self, request: reqwest::Request) -> Result<(StatusCode, String), ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = test_hooks::find_responder(request.url().as_str()) {
            let mock = responder.respond(&request).map_err(ApiError::network)?;
            let status =
                StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return Ok((status, mock.body));
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ApiError::network)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::network)?;
        Ok((status, text))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};

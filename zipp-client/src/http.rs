//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::ApiResponse;

/// HTTP client for making requests to the hosted backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request returning a raw JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// Make a GET request returning an enveloped body
    pub async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// Make a POST request with a JSON body, checking only the HTTP status
    pub async fn post_status_only<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Make a POST request with a JSON body, checking only the envelope's
    /// success flag (for CRUD endpoints whose data the caller discards)
    pub async fn post_checked<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::check_envelope(response).await
    }

    /// Make a PUT request, checking only the envelope's success flag
    pub async fn put_checked<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::check_envelope(response).await
    }

    /// Make a DELETE request, checking only the envelope's success flag
    pub async fn delete_checked(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_envelope(response).await
    }

    /// POST a multipart form (image upload), returning an enveloped body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    /// Decode a raw JSON response after the status check
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = response.error_for_status()?;
        response.json().await.map_err(Into::into)
    }

    /// Verify an `ApiResponse` envelope, ignoring any data it carries
    async fn check_envelope(response: reqwest::Response) -> ClientResult<()> {
        let response = response.error_for_status()?;
        let envelope: ApiResponse<serde_json::Value> = response.json().await?;
        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(ClientError::Api(message));
        }
        Ok(())
    }

    /// Decode an `ApiResponse<T>` envelope; `success == false` maps to
    /// `ClientError::Api` with the backend-provided message.
    async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = response.error_for_status()?;
        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(ClientError::Api(message));
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }
}

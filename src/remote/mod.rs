//! Remote Client
//!
//! Typed bindings to the CreativeBlock HTTP backend, organized by domain.
//! `IdeaApi` and `CatalogApi` are the seams the repository depends on;
//! `HttpApi` implements both over reqwest.

mod error;
mod idea;
mod catalog;


pub use error::{ApiError, ApiResult};
pub use idea::IdeaApi;
pub use catalog::CatalogApi;

use std::time::Duration;

use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ClientConfig, ConfigError};

/// JSON-over-HTTP client for the backend
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    /// `base_url` may omit the trailing slash; endpoints are joined onto it.
    /// A zero `timeout` is rejected.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: normalized,
                reason: "not a hierarchical URL".to_string(),
            });
        }

        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Network(format!("invalid endpoint {}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        decode(check_status(response).await?).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("{} {}", method, url);
        let response = self.client.request(method, url).json(body).send().await?;
        decode(check_status(response).await?).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path)?;
        log::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into `ApiError::Server`, keeping the body text
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match body.trim() {
        "" => status.canonical_reason().unwrap_or("request failed").to_string(),
        text => text.to_string(),
    };
    log::warn!("backend answered {}: {}", status, message);
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

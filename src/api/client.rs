//! Shared HTTP client for the lottery service.
//!
//! # Responsibilities
//! - Hold one reqwest client carrying the default header profile
//! - Resolve endpoint paths against the configured base URL
//! - Attach the session token verbatim as the `Authorization` value
//! - Map HTTP statuses into the typed error taxonomy
//!
//! # Design Decisions
//! - 403 maps to `ApiError::Unauthorized` so callers can key their
//!   refresh-and-retry behavior on it without inspecting statuses
//! - The token has no `Bearer ` prefix; the service expects the raw
//!   value

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::api::headers::default_headers;
use crate::api::session::SessionToken;
use crate::api::types::{ApiError, ApiResult};
use crate::config::schema::ServiceConfig;

/// HTTP client for the lottery service API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client from service settings.
    pub fn new(config: &ServiceConfig) -> ApiResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            ApiError::Config(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        let http = reqwest::Client::builder()
            .default_headers(default_headers())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, base })
    }

    /// GET an endpoint and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, String)]>,
        token: Option<&SessionToken>,
    ) -> ApiResult<T> {
        let mut request = self.http.get(self.endpoint(path)?);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token.as_str());
        }
        let response = request.send().await?;
        Self::decode(path, response).await
    }

    /// POST a JSON body to an endpoint and decode the JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&SessionToken>,
    ) -> ApiResult<T> {
        let mut request = self.http.post(self.endpoint(path)?).json(body);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token.as_str());
        }
        let response = request.send().await?;
        Self::decode(path, response).await
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid endpoint '{}': {}", path, e)))
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status,
            });
        }
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::ApiError;
use crate::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Acknowledgment returned by endpoints with nothing else to say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleOk {
    pub ok: bool,
}

#[derive(Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// Performs one HTTP exchange against the backend and decodes the outcome.
///
/// Never retries: a call issues at most one request on the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn request<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let response = self.exchange(method, path, body, base_url, token).await?;
        decode(&response.body)
    }

    /// Like `request`, but an empty 2xx body counts as `{"ok": true}`.
    pub async fn acknowledge<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<SimpleOk, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = self.exchange(method, path, body, base_url, token).await?;
        if response.body.trim().is_empty() {
            return Ok(SimpleOk { ok: true });
        }
        decode(&response.body)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request::<T, ()>(HttpMethod::Get, path, None, base_url, token)
            .await
    }

    pub async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.request(HttpMethod::Post, path, Some(body), base_url, token)
            .await
    }

    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request::<T, ()>(HttpMethod::Post, path, None, base_url, token)
            .await
    }

    pub async fn put<T, B>(
        &self,
        path: &str,
        body: &B,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.request(HttpMethod::Put, path, Some(body), base_url, token)
            .await
    }

    pub async fn delete(
        &self,
        path: &str,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<SimpleOk, ApiError> {
        self.acknowledge::<()>(HttpMethod::Delete, path, None, base_url, token)
            .await
    }

    async fn exchange<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<HttpResponse, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = build_url(base_url, path)?;

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|error| ApiError::Encode {
                message: error.to_string(),
            })?;

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token.filter(|token| !token.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
        };

        let response = self.transport.execute(request).await.map_err(|error| {
            debug!(%method, %url, %error, "transport failure");
            ApiError::Transport(error)
        })?;

        debug!(%method, %url, status = response.status, "backend responded");

        if !response.is_success() {
            return Err(failure_from(&response));
        }

        Ok(response)
    }
}

/// Joins `base_url` and `path`, rejecting anything that is not an absolute URL.
pub fn build_url(base_url: &str, path: &str) -> Result<Url, ApiError> {
    let raw = format!("{}{}", base_url.trim().trim_end_matches('/'), path);
    match Url::parse(&raw) {
        Ok(url) if url.has_host() => Ok(url),
        _ => Err(ApiError::InvalidUrl { url: raw }),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|error| ApiError::Decode {
        message: error.to_string(),
    })
}

fn failure_from(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<ErrorDetail>(&response.body)
        .map(|envelope| envelope.detail)
        .unwrap_or_else(|_| format!("Request failed ({})", response.status));

    ApiError::Http {
        status: response.status,
        message,
    }
}

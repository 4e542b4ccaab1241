//! HTTP client plumbing shared by all endpoint groups

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::ApiError;
use crate::Result;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_json<T>(&self, path: &str, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = Self::authorize(self.http.get(self.endpoint(path)), token);
        Self::handle(request.send().await?).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &Q,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = Self::authorize(self.http.get(self.endpoint(path)), token).query(query);
        Self::handle(request.send().await?).await
    }

    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = Self::authorize(self.http.post(self.endpoint(path)), token).json(body);
        Self::handle(request.send().await?).await
    }

    pub(crate) async fn put_json<B, T>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = Self::authorize(self.http.put(self.endpoint(path)), token).json(body);
        Self::handle(request.send().await?).await
    }

    /// Empty-bodied POST, used for endpoints keyed entirely off the bearer
    /// token.
    pub(crate) async fn post_empty<T>(&self, path: &str, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = Self::authorize(self.http.post(self.endpoint(path)), token);
        Self::handle(request.send().await?).await
    }

    async fn handle<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // Prefer the backend's own message when the error body is JSON
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .ok()
            .filter(|m| !m.is_empty())
            .or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        tracing::debug!(status = status.as_u16(), %message, "API request failed");

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(
            client.endpoint("/auth/login"),
            "http://localhost:8080/api/auth/login"
        );

        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(
            client.endpoint("/auth/login"),
            "http://localhost:8080/api/auth/login"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(ApiClient::new("not a url").is_err());
    }
}

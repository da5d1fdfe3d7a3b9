//! HTTP client for the CMS REST API.
//!
//! The access token lives in memory and is attached as a bearer token to
//! every non-public path. The refresh token is a cookie, kept by the
//! client's cookie store.

use std::sync::Arc;

use reqwest::{multipart::Form, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// Paths that never carry the access token.
const PUBLIC_PATHS: [&str; 3] = ["/auth/register", "/auth/login", "/auth/refresh"];

/// Whether a request path is reachable without a token.
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|p| path.starts_with(p))
}

/// Inner state shared across clones.
struct ApiClientInner {
    client: Client,
    origin: String,
    base_url: String,
    access_token: RwLock<Option<String>>,
}

/// Shared HTTP client. Cloning is cheap; clones share the token and cookies.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

impl ApiClient {
    /// Create a client for the API served under `<api_url>/api`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let origin = config.api_url.trim_end_matches('/').to_string();
        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: format!("{}/api", origin),
                origin,
                access_token: RwLock::new(None),
            }),
        })
    }

    /// API origin without the `/api` suffix.
    pub fn origin(&self) -> &str {
        &self.inner.origin
    }

    /// Absolute URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Absolute URL of an uploaded asset as returned by the upload endpoint.
    pub fn asset_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.inner.origin, url)
        } else {
            format!("{}/{}", self.inner.origin, url)
        }
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.inner.access_token.write().await = token;
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.access_token.read().await.clone()
    }

    pub async fn has_token(&self) -> bool {
        self.inner.access_token.read().await.is_some()
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, path).await;
        let resp = send(builder).await?;
        parse(resp).await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).await.query(query);
        let resp = send(builder).await?;
        parse(resp).await
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).await.json(body);
        let resp = send(builder).await?;
        parse(resp).await
    }

    /// Send a JSON body, ignoring the response body.
    pub async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path).await.json(body);
        send(builder).await.map(|_| ())
    }

    /// Send a request without a body, ignoring the response body.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        let builder = self.request(method, path).await;
        send(builder).await.map(|_| ())
    }

    /// POST a multipart form and parse the JSON response.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let builder = self.request(Method::POST, path).await.multipart(form);
        let resp = send(builder).await?;
        parse(resp).await
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let mut builder = self.inner.client.request(method, self.url(path));
        if !is_public(path) {
            if let Some(token) = self.inner.access_token.read().await.as_deref() {
                builder = builder.bearer_auth(token);
            }
        }
        builder
    }
}

async fn send(builder: RequestBuilder) -> Result<Response> {
    let resp = builder
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Backend {
            status,
            message: error_message(&body),
        });
    }

    Ok(resp)
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Human-readable message from an error body: the JSON `message` field
/// (string or list of strings) when present, else the raw body.
pub(crate) fn error_message(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("message")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|i| i.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        });
    message.unwrap_or_else(|| body.to_string())
}

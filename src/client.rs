// GitHub API HTTP client.
// Handles authentication headers, request dispatch, and response decoding.

use reqwest::{
    Client, Method, Response,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;

use crate::error::{Error, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT_VERSION: &str = "application/vnd.github.v3+json";
const GITHUB_USER_AGENT: &str = "ghapi";

/// Per-call request parameters: string or boolean values keyed by name.
pub(crate) type Params = serde_json::Map<String, Value>;

/// GitHub API client.
///
/// Owns the HTTP connection pool and the (optional) credential. Endpoint
/// methods are defined separately in the `endpoints` module; this type only
/// knows how to execute a single request and decode its response.
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the public GitHub API.
    ///
    /// Pass `None` to issue unauthenticated requests (public data only).
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE, token)
    }

    /// Create a client against an alternate API root, e.g. a GitHub
    /// Enterprise host.
    pub fn with_base_url(base_url: impl Into<String>, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT_VERSION));
        headers.insert(USER_AGENT, HeaderValue::from_static(GITHUB_USER_AGENT));

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|_| Error::InvalidToken)?,
            );
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the `GITHUB_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").map_err(|_| Error::MissingToken)?;
        Self::new(Some(&token))
    }

    /// Execute one API request and decode the JSON response.
    ///
    /// GET requests carry `params` as query-string pairs; other methods send
    /// them as a JSON body (no body at all when the mapping is empty).
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut builder = self.http.request(method.clone(), &url);
        if method == Method::GET {
            if !params.is_empty() {
                let query: Vec<(&str, String)> = params
                    .iter()
                    .map(|(key, value)| (key.as_str(), query_value(value)))
                    .collect();
                builder = builder.query(&query);
            }
        } else if !params.is_empty() {
            builder = builder.json(params);
        }

        let response = builder.send().await?;
        check_response(response).await
    }
}

/// Render a parameter value for the query string.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

/// Check response status and decode the body.
async fn check_response(response: Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    Ok(response.json().await?)
}

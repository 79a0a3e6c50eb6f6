/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::{JSON_CONTENT_TYPE, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

/// Payload of a single request
pub enum Payload<'a, B: Serialize> {
    /// Serialized as a JSON body
    Json(&'a B),
    /// Serialized as the URL query string
    Query(&'a B),
}

/// Low level HTTP client for the Sendflare API
///
/// Holds the bearer token and one `reqwest` client configured with the fixed
/// request timeout. Every call is a single round trip with no retry.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Config,
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying `reqwest` client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns the configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the headers attached to every request
    ///
    /// Always exactly two: the bearer authorization and the JSON content type,
    /// whatever the verb or payload.
    pub fn make_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", format!("Bearer {}", self.config.token)),
            ("Content-Type", JSON_CONTENT_TYPE.to_string()),
        ]
    }

    /// Makes a GET request with the given query parameters
    pub async fn get<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, Payload::Query(query)).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Payload::Json(body)).await
    }

    /// Makes a DELETE request with the given query parameters
    pub async fn delete<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        self.request(Method::DELETE, path, Payload::Query(query)).await
    }

    /// Makes one request and decodes the response body
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_, B>,
    ) -> Result<T, AppError> {
        let url = self.build_url(path)?;
        let headers = self.make_headers();
        let body = make_http_request(&self.http_client, method, url, &headers, payload).await?;
        parse_response(&body)
    }

    fn build_url(&self, path: &str) -> Result<Url, AppError> {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}")).map_err(|e| AppError::InvalidUrl(e.to_string()))
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Sends one HTTP request and returns the fully read response body
///
/// The body is always drained before the status is looked at, so the
/// connection is released on every path. Non-success statuses become
/// status errors; the body is logged but not decoded.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request, without the query string
/// * `headers` - `(name, value)` pairs attached to the request
/// * `payload` - Body or query parameters to serialize
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    mut url: Url,
    headers: &[(&str, String)],
    payload: Payload<'_, B>,
) -> Result<Vec<u8>, AppError> {
    let mut body = None;
    match payload {
        Payload::Json(value) => {
            let bytes = serde_json::to_vec(value)
                .map_err(|e| AppError::SerializationError(e.to_string()))?;
            body = Some(bytes);
        }
        Payload::Query(value) => {
            let pairs = query_pairs(value)?;
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(&pairs);
            }
        }
    }

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in headers {
        request = request.header(*name, value.as_str());
    }
    if let Some(bytes) = body {
        request = request.body(bytes);
    }

    let response = request.send().await.map_err(AppError::Network)?;
    let status = response.status();
    debug!("Response status: {}", status);

    let bytes = response.bytes().await.map_err(AppError::Read)?;

    if !status.is_success() {
        error!(
            "Request failed with status {}: {}",
            status,
            String::from_utf8_lossy(&bytes)
        );
        return Err(AppError::from_status(status));
    }

    Ok(bytes.to_vec())
}

/// Flattens a value into `(key, value)` query pairs
///
/// The value must serialize to a JSON object of scalars; flattened fields end
/// up at the top level. `null` fields are skipped.
pub fn query_pairs<Q: Serialize>(value: &Q) -> Result<Vec<(String, String)>, AppError> {
    let value =
        serde_json::to_value(value).map_err(|e| AppError::SerializationError(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(AppError::SerializationError(format!(
                "query parameters must be an object, got {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(AppError::SerializationError(format!(
                    "unsupported query value for {key}: {other}"
                )));
            }
        };
        pairs.push((key, value));
    }
    Ok(pairs)
}

/// Decodes a response body into the expected response type
pub fn parse_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Deserialization(e.to_string()))
}

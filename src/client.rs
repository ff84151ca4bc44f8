use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::error::{Result, SdWebUiError};

/// Best-effort parse of a response body.
///
/// Not every endpoint answers with JSON (some return plain status strings),
/// so a body that fails to parse is kept as raw text instead of failing the
/// call. Both success payloads and the `data` attached to status failures
/// carry this type's semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyValue {
    /// The body parsed as JSON.
    Json(Value),
    /// The body was not valid JSON; the raw text, unchanged.
    Text(String),
}

impl BodyValue {
    /// Parse `text` as JSON, falling back to the raw text.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// Either arm as a JSON value; the text arm becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

    /// The JSON arm, `None` for raw text.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw-text arm, `None` for JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_value())?)
    }
}

/// Query parameters for a GET request: either pre-encoded text or ordered
/// key/value pairs.
#[derive(Debug, Clone)]
pub enum Query {
    /// A pre-encoded query string, appended to the path as given.
    Raw(String),
    /// Key/value pairs, URL-encoded in the order given.
    Pairs(Vec<(String, String)>),
}

impl Query {
    /// Encode into query-string text, without the leading `?`.
    pub fn encode(&self) -> String {
        match self {
            Self::Raw(raw) => raw.clone(),
            Self::Pairs(pairs) => {
                let mut serializer = form_urlencoded::Serializer::new(String::new());
                for (key, value) in pairs {
                    serializer.append_pair(key, value);
                }
                serializer.finish()
            }
        }
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Vec<(String, String)>> for Query {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Pairs(pairs)
    }
}

impl From<&[(&str, &str)]> for Query {
    fn from(pairs: &[(&str, &str)]) -> Self {
        Self::Pairs(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Per-call request overrides.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Headers merged over the client's defaults for this call only.
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header for this call; a same-named default is replaced.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Generic JSON-over-HTTP client for a Stable Diffusion Web UI server.
///
/// Owns the base URL and default headers; exposes `get`/`post` operations
/// that resolve the target URL, merge headers, serialize an optional JSON
/// body, classify the response status, and parse the body with a raw-text
/// fallback. One request per call; no retries, timeouts, or redirect
/// following at this layer.
///
/// # Example
/// ```no_run
/// use sdwebui_rs::{Client, ClientConfig};
///
/// # async fn example() -> sdwebui_rs::Result<()> {
/// let client = Client::new(ClientConfig::new("http://127.0.0.1:7860")?);
/// let progress: serde_json::Value = client.get("/sdapi/v1/progress", None, None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a client for `config` with its own transport.
    ///
    /// Redirects are not followed, so a 3xx answer classifies as a status
    /// failure like any other non-2xx code.
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to initialize HTTP client");
        Self { http, config }
    }

    /// Use a custom `reqwest::Client` (for connection pooling, timeouts, TLS).
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// The configuration this client requests with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET request to `path`, optionally carrying query parameters.
    ///
    /// A non-empty query is appended as `{path}?{query}`; an absent or empty
    /// one leaves the path bare. No body is sent.
    pub async fn get<T>(
        &self,
        path: &str,
        params: Option<Query>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let path = match params.map(|params| params.encode()) {
            Some(query) if !query.is_empty() => format!("{path}?{query}"),
            _ => path.to_string(),
        };
        self.request(Method::GET, &path, None, options).await
    }

    /// Issue a POST request to `path`.
    ///
    /// `Some(data)` is serialized to a JSON text body; `None` transmits no
    /// body at all. `Content-Type: application/json` is implied unless
    /// overridden.
    pub async fn post<T, B>(
        &self,
        path: &str,
        data: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = match data {
            Some(data) => Some(serde_json::to_vec(data)?),
            None => None,
        };
        self.request(Method::POST, path, body, options).await
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.base_url().join(path)?;
        let headers = self.effective_headers(options)?;

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = BodyValue::parse(&text);

        if !status.is_success() {
            return Err(SdWebUiError::Status {
                status: status.as_u16(),
                data: body,
            });
        }
        body.deserialize()
    }

    /// Default `Content-Type`, then configured headers, then per-call
    /// headers; later layers replace earlier ones case-insensitively.
    fn effective_headers(&self, options: Option<&RequestOptions>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        insert_headers(&mut headers, self.config.headers())?;
        if let Some(options) = options {
            insert_headers(&mut headers, &options.headers)?;
        }
        Ok(headers)
    }
}

fn insert_headers(headers: &mut HeaderMap, source: &HashMap<String, String>) -> Result<()> {
    for (name, value) in source {
        let invalid = |message: String| SdWebUiError::InvalidHeader {
            name: name.clone(),
            message,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        headers.insert(header_name, header_value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client() -> Client {
        Client::new(ClientConfig::new("http://localhost:7860").unwrap())
    }

    #[test]
    fn test_query_pairs_preserve_order() {
        let query = Query::from(vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        assert_eq!(query.encode(), "b=2&a=1");
    }

    #[test]
    fn test_query_pairs_escape_values() {
        let query = Query::from(&[("q", "a value"), ("x", "1&2")][..]);
        assert_eq!(query.encode(), "q=a+value&x=1%262");
    }

    #[test]
    fn test_query_raw_passes_through() {
        let query = Query::from("key=value");
        assert_eq!(query.encode(), "key=value");
    }

    #[test]
    fn test_empty_query_encodes_empty() {
        assert_eq!(Query::Pairs(Vec::new()).encode(), "");
        assert_eq!(Query::Raw(String::new()).encode(), "");
    }

    #[test]
    fn test_body_value_parses_json() {
        let body = BodyValue::parse(r#"{"detail":"not found"}"#);
        assert_eq!(body, BodyValue::Json(json!({"detail": "not found"})));
    }

    #[test]
    fn test_body_value_keeps_raw_text() {
        let body = BodyValue::parse("pong");
        assert_eq!(body, BodyValue::Text("pong".into()));
        assert_eq!(body.as_text(), Some("pong"));
        assert!(body.as_json().is_none());
    }

    #[test]
    fn test_body_value_text_becomes_json_string() {
        let value = BodyValue::Text("pong".into()).into_value();
        assert_eq!(value, json!("pong"));
    }

    #[test]
    fn test_body_value_deserializes_raw_text_as_string() {
        let result: String = BodyValue::parse("pong").deserialize().unwrap();
        assert_eq!(result, "pong");
    }

    #[test]
    fn test_body_value_deserializes_typed() {
        #[derive(serde::Deserialize)]
        struct Info {
            info: String,
        }
        let body = BodyValue::parse(r#"{"info":"done"}"#);
        let info: Info = body.deserialize().unwrap();
        assert_eq!(info.info, "done");
    }

    #[test]
    fn test_default_content_type_is_json() {
        let headers = test_client().effective_headers(None).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_configured_headers_override_default() {
        let config = ClientConfig::new("http://localhost:7860")
            .unwrap()
            .with_header("Content-Type", "text/plain");
        let client = Client::new(config);
        let headers = client.effective_headers(None).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_per_call_headers_win_case_insensitively() {
        let config = ClientConfig::new("http://localhost:7860")
            .unwrap()
            .with_header("X-Api-Key", "default");
        let client = Client::new(config);
        let options = RequestOptions::new()
            .with_header("x-api-key", "override")
            .with_header("content-type", "text/plain");
        let headers = client.effective_headers(Some(&options)).unwrap();
        assert_eq!(headers.get("x-api-key").unwrap(), "override");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let options = RequestOptions::new().with_header("bad name", "x");
        let err = test_client()
            .effective_headers(Some(&options))
            .unwrap_err();
        assert!(matches!(err, SdWebUiError::InvalidHeader { name, .. } if name == "bad name"));
    }

    #[test]
    fn test_invalid_header_value_is_rejected() {
        let options = RequestOptions::new().with_header("X-Bad", "line\nbreak");
        let err = test_client()
            .effective_headers(Some(&options))
            .unwrap_err();
        assert!(matches!(err, SdWebUiError::InvalidHeader { name, .. } if name == "X-Bad"));
    }

    #[test]
    fn test_relative_path_joins_base_url() {
        let config = ClientConfig::new("http://localhost:7860").unwrap();
        let url = config.base_url().join("/sdapi/v1/txt2img").unwrap();
        assert_eq!(url.as_str(), "http://localhost:7860/sdapi/v1/txt2img");
    }

    #[test]
    fn test_absolute_path_overrides_base_url() {
        let config = ClientConfig::new("http://localhost:7860").unwrap();
        let url = config.base_url().join("https://other.example/x").unwrap();
        assert_eq!(url.as_str(), "https://other.example/x");
    }
}

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use url::Url;

use crate::error::{Result, SdWebUiError};

/// Environment variable consulted when no base URL is given explicitly.
pub const ENV_BASE_URL: &str = "SD_API_URL";
/// Environment variable consulted when no username is given explicitly.
pub const ENV_USERNAME: &str = "SD_API_USERNAME";
/// Environment variable consulted when no password is given explicitly.
pub const ENV_PASSWORD: &str = "SD_API_PASSWORD";

/// Constructor options for [`SdWebUiClient`](crate::SdWebUiClient).
///
/// Every field is optional. Anything left unset (or set to an empty string)
/// falls back to its environment variable.
#[derive(Debug, Clone, Default)]
pub struct SdWebUiOptions {
    /// Base URL for all API requests. Fallback: `SD_API_URL`.
    pub base_url: Option<String>,
    /// Username for basic auth, if the server requires it.
    /// Fallback: `SD_API_USERNAME`.
    pub username: Option<String>,
    /// Password for basic auth, if the server requires it.
    /// Fallback: `SD_API_PASSWORD`.
    pub password: Option<String>,
}

impl SdWebUiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL instead of reading `SD_API_URL`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the basic-auth username instead of reading `SD_API_USERNAME`.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the basic-auth password instead of reading `SD_API_PASSWORD`.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Resolved, immutable configuration shared by every request a client makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Parse `base_url` and create a config with no default headers.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            headers: HashMap::new(),
        })
    }

    /// Add a header to send with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Resolve a [`ClientConfig`] from explicit options plus an environment
/// lookup, without touching the process environment itself.
///
/// Explicit options win over environment values; empty strings count as
/// unset at every step. The base URL is required and must parse as an
/// absolute URL. Credentials are optional: when both username and password
/// resolve, an `Authorization: Basic ...` header is added; when only one
/// resolves, neither is used.
pub fn resolve_config<E>(options: &SdWebUiOptions, env: E) -> Result<ClientConfig>
where
    E: Fn(&str) -> Option<String>,
{
    let base_url = match &options.base_url {
        Some(url) => url.clone(),
        None => non_empty(env(ENV_BASE_URL))
            .ok_or_else(|| SdWebUiError::MissingEnv(ENV_BASE_URL.to_string()))?,
    };
    let mut config = ClientConfig::new(&base_url)?;

    let username = non_empty(options.username.clone()).or_else(|| non_empty(env(ENV_USERNAME)));
    let password = non_empty(options.password.clone()).or_else(|| non_empty(env(ENV_PASSWORD)));
    if let (Some(username), Some(password)) = (username, password) {
        let token = BASE64.encode(format!("{username}:{password}"));
        config = config.with_header("Authorization", format!("Basic {token}"));
    }

    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_explicit_base_url_wins_over_env() {
        let options = SdWebUiOptions::new().with_base_url("http://explicit:7860");
        let config =
            resolve_config(&options, |_| Some("http://from-env:7860".into())).unwrap();
        assert_eq!(config.base_url().as_str(), "http://explicit:7860/");
    }

    #[test]
    fn test_base_url_falls_back_to_env() {
        let config = resolve_config(&SdWebUiOptions::new(), |key| {
            (key == ENV_BASE_URL).then(|| "http://from-env:7860".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url().as_str(), "http://from-env:7860/");
    }

    #[test]
    fn test_missing_base_url_names_the_variable() {
        let err = resolve_config(&SdWebUiOptions::new(), no_env).unwrap_err();
        assert!(matches!(&err, SdWebUiError::MissingEnv(key) if key == "SD_API_URL"));
        assert_eq!(err.to_string(), "Missing environment variable: SD_API_URL");
    }

    #[test]
    fn test_empty_env_base_url_counts_as_missing() {
        let err = resolve_config(&SdWebUiOptions::new(), |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, SdWebUiError::MissingEnv(_)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let options = SdWebUiOptions::new().with_base_url("not a url");
        let err = resolve_config(&options, no_env).unwrap_err();
        assert!(matches!(err, SdWebUiError::Url(_)));
    }

    #[test]
    fn test_both_credentials_build_basic_auth() {
        let options = SdWebUiOptions::new()
            .with_base_url("http://localhost:7860")
            .with_username("user")
            .with_password("pass");
        let config = resolve_config(&options, no_env).unwrap();
        assert_eq!(
            config.headers().get("Authorization").map(String::as_str),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn test_username_alone_adds_no_header() {
        let options = SdWebUiOptions::new()
            .with_base_url("http://localhost:7860")
            .with_username("user");
        let config = resolve_config(&options, no_env).unwrap();
        assert!(config.headers().is_empty());
    }

    #[test]
    fn test_password_alone_adds_no_header() {
        let options = SdWebUiOptions::new()
            .with_base_url("http://localhost:7860")
            .with_password("pass");
        let config = resolve_config(&options, no_env).unwrap();
        assert!(config.headers().is_empty());
    }

    #[test]
    fn test_credentials_fall_back_to_env() {
        let options = SdWebUiOptions::new().with_base_url("http://localhost:7860");
        let config = resolve_config(&options, |key| match key {
            ENV_USERNAME => Some("user".into()),
            ENV_PASSWORD => Some("pass".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config.headers().get("Authorization").map(String::as_str),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn test_empty_explicit_credential_falls_through_to_env() {
        let options = SdWebUiOptions::new()
            .with_base_url("http://localhost:7860")
            .with_username("")
            .with_password("pass");
        let config = resolve_config(&options, |key| match key {
            ENV_USERNAME => Some("user".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config.headers().get("Authorization").map(String::as_str),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn test_empty_credentials_everywhere_add_no_header() {
        let options = SdWebUiOptions::new()
            .with_base_url("http://localhost:7860")
            .with_username("")
            .with_password("");
        let config = resolve_config(&options, |key| match key {
            ENV_BASE_URL => None,
            _ => Some(String::new()),
        })
        .unwrap();
        assert!(config.headers().is_empty());
    }

    #[test]
    fn test_config_with_header_builder() {
        let config = ClientConfig::new("http://localhost:7860")
            .unwrap()
            .with_header("X-Custom", "1");
        assert_eq!(config.headers().get("X-Custom").map(String::as_str), Some("1"));
    }
}

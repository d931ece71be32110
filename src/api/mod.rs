use crate::models::{Link, LinksResponse, Stats};
use crate::util::page_origin;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
    /// Backend answered with `{"error": "..."}`.
    Backend,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn backend(message: String) -> Self {
        Self {
            kind: ApiErrorKind::Backend,
            message,
        }
    }

    fn http(status: u16, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("Request failed ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) const DEFAULT_API_PATH: &str = "/api";

#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self {
            api_url: resolve_api_base(&page_origin(), Self::configured_api_url()),
        }
    }

    /// `window.ENV.API_URL`, falling back to `window.ENV.api_url`.
    fn configured_api_url() -> Option<String> {
        let env = web_sys::window()?.get("ENV")?;
        if env.is_undefined() || !env.is_object() {
            return None;
        }

        ["API_URL", "api_url"].iter().find_map(|key| {
            js_sys::Reflect::get(&env, &(*key).into())
                .ok()
                .and_then(|v| v.as_string())
                .filter(|s| !s.trim().is_empty())
        })
    }
}

/// reqwest on wasm only accepts absolute URLs, so relative bases are anchored at the page origin.
pub(crate) fn resolve_api_base(origin: &str, configured: Option<String>) -> String {
    let origin = origin.trim_end_matches('/');
    let base = configured.unwrap_or_else(|| DEFAULT_API_PATH.to_string());
    let base = base.trim_end_matches('/');

    if base.starts_with("http://") || base.starts_with("https://") {
        base.to_string()
    } else if base.starts_with('/') {
        format!("{origin}{base}")
    } else {
        format!("{origin}/{base}")
    }
}

/// Message for a truthy `error` field; `null`, `false`, `0` and `""` mean no error.
pub(crate) fn backend_error_message(err: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match err {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

/// Turns a raw response into `T`, honouring the backend's `{"error": ...}` envelope first.
pub(crate) fn parse_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let ok = (200..300).contains(&status);

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) if !ok => return Err(ApiError::http(status, body)),
        Err(e) => return Err(ApiError::parse(e)),
    };

    if let Some(err) = value.get("error").and_then(backend_error_message) {
        return Err(ApiError::backend(err));
    }

    if !ok {
        return Err(ApiError::http(status, body));
    }

    serde_json::from_value(value).map_err(ApiError::parse)
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn endpoint(&self, path: &str, user_id: &str) -> String {
        format!(
            "{}{}?u={}",
            self.base_url,
            path,
            urlencoding::encode(user_id)
        )
    }

    async fn get_for_user<T: DeserializeOwned>(&self, path: &str, user_id: &str) -> ApiResult<T> {
        let url = self.endpoint(path, user_id);
        log::debug!("GET {url}");

        let res = reqwest::Client::new()
            .get(url)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = res.status().as_u16();
        let body = res.text().await.map_err(ApiError::network)?;
        parse_envelope(status, &body)
    }

    pub async fn get_stats(&self, user_id: &str) -> ApiResult<Stats> {
        self.get_for_user("/stats", user_id).await
    }

    pub async fn get_links(&self, user_id: &str) -> ApiResult<Vec<Link>> {
        let data: LinksResponse = self.get_for_user("/links", user_id).await?;
        Ok(data.links)
    }
}

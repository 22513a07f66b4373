// ============================================================================
// API CLIENT - Authenticated HTTP dispatch (stateless)
// ============================================================================
// Every network call in the app goes through dispatch(): it resolves the
// target URL, attaches headers and the bearer token, and intercepts 401s.
// The typed verb helpers layer JSON (de)serialization and a uniform
// error path on top. No business logic lives here.
// ============================================================================

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::utils::constants::{BACKEND_URL, LOGIN_PATH};
use crate::utils::errors::ApiError;
use crate::utils::navigation::{current_path, login_redirect_url, navigate_to};
use crate::utils::storage::{clear_session, get_token};

/// Per-request knobs. `skip_auth` suppresses both the Authorization header
/// and the 401 teardown, for endpoints that work without a session.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub skip_auth: bool,
}

impl RequestOptions {
    pub fn unauthenticated() -> Self {
        Self {
            skip_auth: true,
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// API client - HTTP communication only (stateless).
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Issue a request and return the raw response.
    ///
    /// An authenticated call that comes back 401 never reaches the caller:
    /// the stored session is cleared first, then the browser is sent to the
    /// login screen (with a redirect back here), and the caller gets
    /// [`ApiError::AuthenticationRequired`]. Every other status passes
    /// through untouched for the verb helpers to judge.
    pub async fn dispatch(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Result<Response, ApiError> {
        let url = self.resolve_url(endpoint);

        // Default header first, caller headers second: set-semantics means
        // the caller wins on conflict.
        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }
        if !options.skip_auth {
            if let Some(token) = get_token() {
                builder = builder.header("Authorization", &format!("Bearer {}", token));
            }
        }

        let request = match body {
            Some(payload) => builder
                .body(payload)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if should_intercept_unauthorized(response.status(), options.skip_auth) {
            log::warn!("🔒 Session rejected by backend, tearing down and redirecting to login");
            // Teardown strictly before navigation
            clear_session();
            let path = current_path();
            if path != LOGIN_PATH {
                navigate_to(&login_redirect_url(&path));
            }
            return Err(ApiError::AuthenticationRequired);
        }

        Ok(response)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(endpoint, Method::GET, None, options).await?;
        read_json_body(&response, "GET", endpoint).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = encode_body(body)?;
        let response = self
            .dispatch(endpoint, Method::POST, payload, options)
            .await?;
        read_json_body(&response, "POST", endpoint).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = encode_body(body)?;
        let response = self
            .dispatch(endpoint, Method::PUT, payload, options)
            .await?;
        read_json_body(&response, "PUT", endpoint).await
    }

    /// DELETE endpoints often reply 204 with no body; those resolve to an
    /// empty JSON object instead of a parse failure.
    pub async fn delete(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .dispatch(endpoint, Method::DELETE, None, options)
            .await?;
        if !response.ok() {
            return Err(status_error(&response, "DELETE", endpoint).await);
        }
        if !is_json_content_type(response.headers().get("content-type").as_deref()) {
            return Ok(serde_json::json!({}));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Absolute URLs pass through verbatim; everything else is relative to
    /// the configured backend base.
    fn resolve_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}{}", self.base_url, endpoint)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn should_intercept_unauthorized(status: u16, skip_auth: bool) -> bool {
    status == 401 && !skip_auth
}

fn encode_body<B: Serialize>(body: Option<&B>) -> Result<Option<String>, ApiError> {
    match body {
        Some(value) => serde_json::to_string(value)
            .map(Some)
            .map_err(|e| ApiError::Parse(e.to_string())),
        None => Ok(None),
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

async fn read_json_body<T: DeserializeOwned>(
    response: &Response,
    method: &str,
    endpoint: &str,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response, method, endpoint).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Best effort: carry whatever the server said, fall back to a generated
/// line when the body is empty.
async fn status_error(response: &Response, method: &str, endpoint: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        failure_message(method, endpoint, status)
    } else {
        body
    };
    ApiError::RequestFailed { status, message }
}

fn failure_message(method: &str, endpoint: &str, status: u16) -> String {
    format!("{} {} failed with status {}", method, endpoint, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_endpoints_get_the_base_url_prefix() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/v1");
        assert_eq!(
            client.resolve_url("/portfolios"),
            "http://localhost:8000/api/v1/portfolios"
        );
    }

    #[test]
    fn absolute_urls_pass_through_verbatim() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/v1");
        assert_eq!(
            client.resolve_url("https://data.psx.com.pk/symbols"),
            "https://data.psx.com.pk/symbols"
        );
        assert_eq!(
            client.resolve_url("http://other.host/x"),
            "http://other.host/x"
        );
    }

    #[test]
    fn unauthorized_is_intercepted_only_for_authenticated_calls() {
        assert!(should_intercept_unauthorized(401, false));
        assert!(!should_intercept_unauthorized(401, true));
        assert!(!should_intercept_unauthorized(403, false));
        assert!(!should_intercept_unauthorized(200, false));
    }

    #[test]
    fn empty_bodies_get_a_generated_failure_line() {
        assert_eq!(
            failure_message("DELETE", "/portfolios/3", 500),
            "DELETE /portfolios/3 failed with status 500"
        );
    }

    #[test]
    fn json_content_type_detection() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(!is_json_content_type(Some("text/plain")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn body_encoding_is_transparent_for_none() {
        let body: Option<&serde_json::Value> = None;
        assert_eq!(encode_body(body).unwrap(), None);

        let value = serde_json::json!({"name": "KSE-100 tracker"});
        let encoded = encode_body(Some(&value)).unwrap();
        assert_eq!(encoded.as_deref(), Some(r#"{"name":"KSE-100 tracker"}"#));
    }
}

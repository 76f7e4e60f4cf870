use std::time::Duration;
use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::config::constants::{request_timeout, CONFIGS_PATH, NETWORK_ERROR_MESSAGE, SNIPPET_MAX_CHARS, TEST_PATH};
use crate::enums::test_error::TestError;
use crate::errors::{SynochatError, SynochatResult};
use crate::helpers::text_helper::truncate_chars;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config_value_request::ConfigValueRequest;
use crate::structs::send_result::SendResult;
use crate::structs::synochat_test_request::SynochatTestRequest;
use crate::traits::settings_api::SettingsApi;

/// Client for the WeRSS `/wx` settings API.
#[derive(Clone)]
pub struct WxApiClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl WxApiClient {
    pub fn new(base_url: impl Into<String>) -> SynochatResult<Self> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> WxApiClientBuilder {
        WxApiClientBuilder::default()
    }

    pub fn from_config(server: &ServerConfig) -> SynochatResult<Self> {
        let mut builder = Self::builder()
            .base_url(server.base_url.clone())
            .timeout(request_timeout(server.timeout_secs));

        if let Some(token) = server.api_token() {
            builder = builder.api_token(token);
        }

        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = &self.api_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        request
    }

    fn config_path(key: &str) -> String {
        format!("{}/{}", CONFIGS_PATH, key)
    }

    /// Pulls the stored string out of the shapes the settings endpoint answers with:
    /// a bare JSON string, a `{ "data": ... }` envelope, or a `{ "config_value": ... }` record.
    pub fn extract_config_value(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(map) => map
                .get("config_value")
                .or_else(|| map.get("data"))
                .and_then(Self::extract_config_value),
            Value::Array(_) => None,
        }
    }

    /// Turns a rejected test call into the error the controller reports.
    pub fn parse_error_payload(status: StatusCode, body: &str) -> TestError {
        if body.trim().is_empty() {
            return TestError::Transport(format!("Request failed with status code {}", status.as_u16()));
        }

        let json = match serde_json::from_str::<Value>(body) {
            Ok(json @ Value::Object(_)) => json,
            _ => {
                return TestError::Remote {
                    status_code: status.as_u16(),
                    snippet: truncate_chars(body, SNIPPET_MAX_CHARS),
                };
            }
        };

        let payload = match json.get("detail") {
            Some(detail @ Value::Object(_)) => detail,
            _ => &json,
        };

        let status_code = payload
            .get("status_code")
            .or_else(|| payload.get("status"))
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or_else(|| status.as_u16());

        let snippet = ["snippet", "message", "error"]
            .iter()
            .find_map(|field| payload.get(*field).and_then(Value::as_str))
            .or_else(|| json.get("detail").and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();

        TestError::Remote { status_code, snippet }
    }

    fn transport_error(error: &reqwest::Error) -> TestError {
        let message = error.to_string();
        if message.is_empty() {
            TestError::Transport(NETWORK_ERROR_MESSAGE.to_string())
        } else {
            TestError::Transport(message)
        }
    }
}

#[async_trait]
impl SettingsApi for WxApiClient {

    async fn get_config_value(&self, key: &str) -> SynochatResult<Option<String>> {
        let response = self.request(Method::GET, &Self::config_path(key)).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            log::debug!("Setting {} is not stored", key);
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynochatError::network_error(
                &format!("reading {}", key),
                Some(&self.base_url),
                Some(status.as_u16()),
                &truncate_chars(&body, SNIPPET_MAX_CHARS),
            ));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        Ok(match serde_json::from_str::<Value>(&body) {
            Ok(json) => Self::extract_config_value(&json),
            Err(_) => Some(body),
        })
    }

    async fn put_config_value(&self, key: &str, value: &str) -> SynochatResult<()> {
        let body = ConfigValueRequest { config_value: value.to_string() };
        let response = self
            .request(Method::PUT, &Self::config_path(key))
            .json(&body)
            .send()
            .await
            .map_err(|e| SynochatError::settings_error(key, "written", &e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            log::debug!("Stored setting {}", key);
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(SynochatError::settings_error(
            key,
            "written",
            &format!("HTTP {}: {}", status.as_u16(), truncate_chars(&text, SNIPPET_MAX_CHARS)),
        ))
    }

    async fn test_synochat(&self, request: SynochatTestRequest) -> Result<SendResult, TestError> {
        let response = self
            .request(Method::POST, TEST_PATH)
            .json(&request)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<SendResult>()
                .await
                .map_err(|e| Self::transport_error(&e));
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::parse_error_payload(status, &body))
    }
}

#[derive(Default)]
pub struct WxApiClientBuilder {
    base_url: Option<String>,
    api_token: Option<String>,
    timeout: Option<Duration>,
}

impl WxApiClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> SynochatResult<WxApiClient> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| SynochatError::config_error("base_url is required", Some("server.base_url"), None))?;

        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new()
            .user_agent(concat!("synochat-cli/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(WxApiClient {
            client,
            base_url,
            api_token: self.api_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_bare_and_wrapped_values() {
        assert_eq!(WxApiClient::extract_config_value(&json!("https://chat")), Some("https://chat".to_string()));
        assert_eq!(WxApiClient::extract_config_value(&json!({"code": 0, "data": "true"})), Some("true".to_string()));
        assert_eq!(
            WxApiClient::extract_config_value(&json!({"data": {"config_key": "k", "config_value": "v"}})),
            Some("v".to_string())
        );
        assert_eq!(WxApiClient::extract_config_value(&json!({"data": null})), None);
        assert_eq!(WxApiClient::extract_config_value(&json!(true)), Some("true".to_string()));
    }

    #[test]
    fn structured_error_payload_passes_through() {
        let error = WxApiClient::parse_error_payload(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"status_code": 502, "snippet": "bad gateway"}"#,
        );
        assert_eq!(error, TestError::Remote { status_code: 502, snippet: "bad gateway".to_string() });
    }

    #[test]
    fn detail_wrapper_is_unwrapped() {
        let body = r#"{"detail": {"ok": false, "status": 429, "snippet": "请等待 7 秒后再试", "error": "Cooling period"}}"#;
        let error = WxApiClient::parse_error_payload(StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(error, TestError::Remote { status_code: 429, snippet: "请等待 7 秒后再试".to_string() });
    }

    #[test]
    fn string_detail_uses_http_status() {
        let error = WxApiClient::parse_error_payload(StatusCode::UNAUTHORIZED, r#"{"detail": "Not authenticated"}"#);
        assert_eq!(error, TestError::Remote { status_code: 401, snippet: "Not authenticated".to_string() });
    }

    #[test]
    fn empty_body_is_a_transport_failure() {
        let error = WxApiClient::parse_error_payload(StatusCode::BAD_GATEWAY, "");
        assert_eq!(error, TestError::Transport("Request failed with status code 502".to_string()));
    }

    #[test]
    fn builder_requires_base_url_and_trims_slash() {
        assert!(WxApiClient::builder().build().is_err());
        let client = WxApiClient::new("http://localhost:8001/api/v1/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8001/api/v1");
    }
}

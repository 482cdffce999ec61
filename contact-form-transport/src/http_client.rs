//! Generic HTTP client tools
//!
//! Wraps the send/log/read-body flow so transports only build the
//! `RequestBuilder`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::TransportError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub(crate) fn create_http_client(request_timeout: Duration) -> Result<Client, TransportError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .build()
        .map_err(|e| TransportError::Network {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `transport_name` - transport name (for logging)
    /// * `method_name` - request method name (for logging)
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - the request completed with 2xx/3xx
    /// * `Err(TransportError::Status)` - the endpoint answered 4xx/5xx
    /// * `Err(TransportError::Network | Timeout)` - the request did not complete
    pub async fn execute_request(
        request_builder: RequestBuilder,
        transport_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), TransportError> {
        log::debug!("[{transport_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| map_send_error(&e))?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[{transport_name}] Response Status: {status_code}");

        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status_code,
                body: truncate_for_log(&body),
            });
        }

        // Body is informational only; a failed read after a good status is still a delivery.
        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("[{transport_name}] Failed to read response body: {e}");
                String::new()
            }
        };

        log::debug!(
            "[{transport_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }
}

fn map_send_error(e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout {
            detail: e.to_string(),
        }
    } else {
        TransportError::Network {
            detail: e.to_string(),
        }
    }
}

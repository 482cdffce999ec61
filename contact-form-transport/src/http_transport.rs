//! HTTP POST transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE as CONTENT_TYPE_HEADER;
use url::Url;

use crate::error::{Result, TransportError};
use crate::http_client::{DEFAULT_REQUEST_TIMEOUT_SECS, HttpUtils, create_http_client};
use crate::payload::{CONTENT_TYPE, FormPayload};
use crate::traits::FormTransport;

const TRANSPORT_NAME: &str = "http";

/// Submits forms as a urlencoded POST to a fixed endpoint.
///
/// # Construction
///
/// ```rust,no_run
/// use contact_form_transport::HttpFormTransport;
///
/// let transport = HttpFormTransport::new("https://example.com/")?;
/// # Ok::<(), contact_form_transport::TransportError>(())
/// ```
#[derive(Debug)]
pub struct HttpFormTransport {
    client: Client,
    endpoint: Url,
}

impl HttpFormTransport {
    /// Creates a transport with the default 30 s request timeout.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Creates a transport whose client aborts requests after `request_timeout`.
    pub fn with_timeout(endpoint: &str, request_timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: create_http_client(request_timeout)?,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Validates that `endpoint` is an absolute http(s) URL.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| TransportError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        detail: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TransportError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            detail: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[async_trait]
impl FormTransport for HttpFormTransport {
    fn id(&self) -> &'static str {
        TRANSPORT_NAME
    }

    async fn send(&self, payload: &FormPayload) -> Result<()> {
        let body = payload.encode();
        log::debug!(
            "[{TRANSPORT_NAME}] Payload keys {:?} ({} bytes)",
            payload.keys(),
            body.len()
        );

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE)
            .body(body);

        HttpUtils::execute_request(request, TRANSPORT_NAME, "POST", self.endpoint.as_str())
            .await
            .map(|_| ())
    }
}

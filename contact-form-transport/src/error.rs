use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for a single form submission attempt.
///
/// All variants are serializable so a view layer can forward them as
/// structured data alongside the submission state.
///
/// No variant is retried automatically: every submit is a single attempt and
/// the user decides whether to try again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum TransportError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the configured ceiling.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a 4xx/5xx status.
    #[error("Endpoint rejected submission (HTTP {status})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint '{endpoint}': {detail}")]
    InvalidEndpoint {
        /// The endpoint as configured.
        endpoint: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A urlencoded body could not be decoded.
    #[error("Decode error: {detail}")]
    Decode {
        /// Details about the decode failure.
        detail: String,
    },
}

impl TransportError {
    /// 是否为预期行为（对端拒绝、配置错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Status { status, .. } => (400..500).contains(status),
            Self::InvalidEndpoint { .. } | Self::Decode { .. } => true,
            Self::Network { .. } | Self::Timeout { .. } => false,
        }
    }

    /// Whether the error came from the request running out of time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Convenience type alias for `Result<T, TransportError>`.
pub type Result<T> = std::result::Result<T, TransportError>;

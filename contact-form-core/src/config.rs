//! 表单配置

use std::time::Duration;

use contact_form_transport::{parse_endpoint, FormPayload};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{FieldName, FormFields};

/// Discriminator key: tells a shared endpoint which form was submitted.
pub const FORM_NAME_KEY: &str = "form-name";

const DEFAULT_ENDPOINT: &str = "http://localhost/";
const DEFAULT_FORM_NAME: &str = "contact";
const DEFAULT_HONEYPOT_FIELD: &str = "bot-field";
/// 默认提交超时（毫秒）
const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 30_000;

/// Settings for one contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Root URL of the hosting service; the form is POSTed here.
    pub endpoint: String,
    /// Value of the `form-name` discriminator.
    pub form_name: String,
    /// Key of the honeypot input, always sent empty.
    pub honeypot_field: String,
    /// Ceiling for one submit attempt, in milliseconds.
    pub submit_timeout_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            form_name: DEFAULT_FORM_NAME.to_string(),
            honeypot_field: DEFAULT_HONEYPOT_FIELD.to_string(),
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT_MS,
        }
    }
}

impl FormConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_form_name(mut self, form_name: impl Into<String>) -> Self {
        self.form_name = form_name.into();
        self
    }

    #[must_use]
    pub fn with_honeypot_field(mut self, honeypot_field: impl Into<String>) -> Self {
        self.honeypot_field = honeypot_field.into();
        self
    }

    /// Sets the submit ceiling. Sub-millisecond remainders round up, so only
    /// `Duration::ZERO` yields a zero (invalid) timeout.
    #[must_use]
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        let mut millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        if timeout.subsec_nanos() % 1_000_000 != 0 {
            millis = millis.saturating_add(1);
        }
        self.submit_timeout_ms = millis;
        self
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    /// Checks every setting; the first problem found is returned.
    pub fn validate(&self) -> CoreResult<()> {
        parse_endpoint(&self.endpoint).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;

        if self.form_name.is_empty() {
            return Err(CoreError::InvalidConfig(
                "form_name must not be empty".to_string(),
            ));
        }

        let honeypot = self.honeypot_field.as_str();
        if honeypot.is_empty() {
            return Err(CoreError::InvalidConfig(
                "honeypot_field must not be empty".to_string(),
            ));
        }
        if honeypot == FORM_NAME_KEY || honeypot.parse::<FieldName>().is_ok() {
            return Err(CoreError::InvalidConfig(format!(
                "honeypot_field '{honeypot}' collides with a form key"
            )));
        }

        if self.submit_timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "submit_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Wire payload for `fields`: discriminator, honeypot, then the inputs in form order.
    pub fn payload(&self, fields: &FormFields) -> FormPayload {
        let mut payload = FormPayload::new();
        payload.push(FORM_NAME_KEY, self.form_name.as_str());
        payload.push(self.honeypot_field.as_str(), "");
        for field in FieldName::ALL {
            payload.push(field.as_str(), fields.get(field));
        }
        payload
    }
}

//! 测试辅助模块
//!
//! 提供 mock 提交通道和便捷的测试工厂方法。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contact_form_transport::{FormPayload, FormTransport, TransportError};
use tokio::sync::Notify;

use crate::config::FormConfig;
use crate::controller::FormSubmissionController;
use crate::types::{FieldName, FormFields};

// ===== MockTransport =====

/// Records every payload and answers according to its mode.
pub struct MockTransport {
    payloads: Mutex<Vec<FormPayload>>,
    /// 如果 Some，send 时返回此错误
    failure: Mutex<Option<TransportError>>,
    /// 如果 Some，send 会等待 `release()` 后才返回
    gate: Option<Notify>,
    /// send 永不返回（用于超时测试）
    hang: bool,
}

impl MockTransport {
    fn with_mode(gate: Option<Notify>, hang: bool) -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            gate,
            hang,
        }
    }

    pub fn succeeding() -> Self {
        Self::with_mode(None, false)
    }

    pub fn failing(error: TransportError) -> Self {
        let mock = Self::succeeding();
        mock.set_failure(Some(error));
        mock
    }

    /// Holds every request until [`release`](Self::release) is called.
    pub fn gated() -> Self {
        Self::with_mode(Some(Notify::new()), false)
    }

    pub fn hanging() -> Self {
        Self::with_mode(None, true)
    }

    pub fn set_failure(&self, error: Option<TransportError>) {
        *self.failure.lock().unwrap() = error;
    }

    /// Lets one gated request complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn payloads(&self) -> Vec<FormPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormTransport for MockTransport {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn send(&self, payload: &FormPayload) -> contact_form_transport::Result<()> {
        self.payloads.lock().unwrap().push(payload.clone());

        if self.hang {
            std::future::pending::<()>().await;
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.failure.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ===== 工厂方法 =====

/// Controller with the default config wired to `mock`.
pub fn controller_with(mock: &Arc<MockTransport>) -> FormSubmissionController {
    FormSubmissionController::new(
        Arc::clone(mock) as Arc<dyn FormTransport>,
        FormConfig::default(),
    )
    .unwrap()
}

pub fn filled_fields() -> FormFields {
    FormFields::new("A", "a@b.com", "hi")
}

/// Types `fields` into the controller one input at a time.
pub fn fill(controller: &FormSubmissionController, fields: &FormFields) {
    for field in FieldName::ALL {
        controller.update_field(field, fields.get(field));
    }
}

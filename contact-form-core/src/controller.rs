//! 表单提交控制器
//!
//! Owns the form fields and the submission state. Every mutation goes through
//! a single `watch` channel, so readers always see a consistent
//! [`FormSnapshot`] and the `Submitting` transition is atomic with taking the
//! payload snapshot.

use std::sync::Arc;

use contact_form_transport::{FormPayload, FormTransport, HttpFormTransport, TransportError};
use tokio::sync::watch;

use crate::config::FormConfig;
use crate::error::{CoreResult, ValidationError};
use crate::types::{FieldName, FormFields, FormSnapshot, SubmissionState};
use crate::validation::validate;

const LOG_TARGET: &str = "contact";

/// Detail recorded when a `submit()` future is dropped mid-request.
const ABANDONED_DETAIL: &str = "submission abandoned";

/// Outcome of the synchronous part of `submit()`.
enum Begin {
    AlreadySubmitting,
    Rejected(ValidationError),
    Started(FormPayload),
}

/// Contact form controller.
///
/// Shared by reference: a view can keep editing fields while a `submit()`
/// future is pending on the same executor. At most one request is in flight;
/// a `submit()` issued meanwhile is a no-op.
pub struct FormSubmissionController {
    transport: Arc<dyn FormTransport>,
    config: FormConfig,
    snapshot: watch::Sender<FormSnapshot>,
}

impl FormSubmissionController {
    /// 使用注入的提交通道创建控制器
    ///
    /// `config` is validated first; an unusable config is rejected here
    /// rather than on the first submit.
    pub fn new(transport: Arc<dyn FormTransport>, config: FormConfig) -> CoreResult<Self> {
        config.validate()?;
        let (snapshot, _) = watch::channel(FormSnapshot::default());
        Ok(Self {
            transport,
            config,
            snapshot,
        })
    }

    /// Validates `config` and builds an HTTP transport for its endpoint.
    pub fn from_config(config: FormConfig) -> CoreResult<Self> {
        config.validate()?;
        let transport =
            HttpFormTransport::with_timeout(&config.endpoint, config.submit_timeout())?;
        log::debug!(
            "[{LOG_TARGET}] Form '{}' posts to {}",
            config.form_name,
            transport.endpoint()
        );
        Self::new(Arc::new(transport), config)
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn current_state(&self) -> SubmissionState {
        self.snapshot.borrow().state.clone()
    }

    pub fn current_fields(&self) -> FormFields {
        self.snapshot.borrow().fields.clone()
    }

    /// Fields and state read together.
    pub fn snapshot(&self) -> FormSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Receiver notified on every edit and state transition.
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.snapshot.subscribe()
    }

    /// Replaces one field and returns the new fields.
    ///
    /// The current state is left as is, including `Invalid` and `Failed`.
    pub fn update_field(&self, field: FieldName, value: impl Into<String>) -> FormFields {
        let value = value.into();
        let mut updated = FormFields::default();
        self.snapshot.send_modify(|s| {
            s.fields = s.fields.with_field(field, value);
            updated = s.fields.clone();
        });
        updated
    }

    /// Same as [`update_field`](Self::update_field), addressed by input name.
    pub fn update_field_by_name(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> CoreResult<FormFields> {
        let field = name.parse::<FieldName>()?;
        Ok(self.update_field(field, value))
    }

    /// Runs one submit attempt and returns the state it ends in.
    ///
    /// Returns `Submitting` without side effects when a request is already in
    /// flight.
    pub async fn submit(&self) -> SubmissionState {
        let payload = match self.begin_submit() {
            Begin::AlreadySubmitting => {
                log::debug!("[{LOG_TARGET}] Submit ignored, request already in flight");
                return SubmissionState::Submitting;
            }
            Begin::Rejected(e) => {
                log::warn!(
                    "[{LOG_TARGET}] Submit rejected, missing fields: {:?}",
                    e.missing
                );
                return SubmissionState::Invalid(e);
            }
            Begin::Started(payload) => payload,
        };

        log::debug!(
            "[{LOG_TARGET}] Submitting via {} with keys {:?}",
            self.transport.id(),
            payload.keys()
        );

        let guard = InFlightGuard::new(&self.snapshot);

        let next = match self.send_with_timeout(&payload).await {
            Ok(()) => {
                log::info!("[{LOG_TARGET}] Form '{}' submitted", self.config.form_name);
                SubmissionState::Success
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{LOG_TARGET}] Submission failed: {e}");
                } else {
                    log::error!("[{LOG_TARGET}] Submission failed: {e}");
                }
                SubmissionState::Failed(e)
            }
        };

        guard.disarm();
        self.snapshot.send_modify(|s| {
            if next == SubmissionState::Success {
                s.fields = FormFields::default();
            }
            log::debug!(
                "[{LOG_TARGET}] State {} -> {}",
                s.state.label(),
                next.label()
            );
            s.state = next.clone();
        });
        next
    }

    /// Back to `Idle` with empty fields. Refused (returns `false`) while a
    /// request is in flight.
    pub fn reset(&self) -> bool {
        self.snapshot.send_if_modified(|s| {
            if s.state.is_submitting() {
                return false;
            }
            *s = FormSnapshot::default();
            true
        })
    }

    /// Validates and, if valid, flips to `Submitting` and snapshots the payload
    /// in the same state update.
    fn begin_submit(&self) -> Begin {
        let mut begin = Begin::AlreadySubmitting;
        self.snapshot.send_if_modified(|s| {
            if s.state.is_submitting() {
                return false;
            }
            match validate(&s.fields) {
                Ok(()) => {
                    begin = Begin::Started(self.config.payload(&s.fields));
                    s.state = SubmissionState::Submitting;
                }
                Err(e) => {
                    s.state = SubmissionState::Invalid(e.clone());
                    begin = Begin::Rejected(e);
                }
            }
            true
        });
        begin
    }

    async fn send_with_timeout(&self, payload: &FormPayload) -> Result<(), TransportError> {
        let limit = self.config.submit_timeout();
        tokio::time::timeout(limit, self.transport.send(payload))
            .await
            .unwrap_or_else(|_| {
                Err(TransportError::Timeout {
                    detail: format!("no response within {}ms", limit.as_millis()),
                })
            })
    }
}

/// Moves the controller out of `Submitting` if the `submit()` future is
/// dropped before the request resolves.
struct InFlightGuard<'a> {
    snapshot: &'a watch::Sender<FormSnapshot>,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(snapshot: &'a watch::Sender<FormSnapshot>) -> Self {
        Self {
            snapshot,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        log::warn!("[{LOG_TARGET}] Submit dropped while request was in flight");
        self.snapshot.send_if_modified(|s| {
            if !s.state.is_submitting() {
                return false;
            }
            s.state = SubmissionState::Failed(TransportError::Network {
                detail: ABANDONED_DETAIL.to_string(),
            });
            true
        });
    }
}

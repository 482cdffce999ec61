use serde::{Deserialize, Serialize};

use crate::error::{TransportError, ValidationError};
use crate::types::FormFields;

/// Message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
/// Message shown when the submission could not be delivered.
pub const FAILURE_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// Where the current submit attempt stands.
///
/// Exactly one variant is active; `Success` and `Failed` end an attempt and
/// stay until the next `submit()` or `reset()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error")]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Rejected before any request was made
    Invalid(ValidationError),
    /// A request is in flight
    Submitting,
    Success,
    /// The request failed; fields were kept
    Failed(TransportError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Static text for the view, if the state has any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Invalid(_) => Some("Please fill in all fields"),
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Failed(_) => Some(FAILURE_MESSAGE),
        }
    }

    /// Whether the state should be rendered as an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Failed(_))
    }

    /// Short lowercase label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Invalid(_) => "invalid",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Failed(_) => "failed",
        }
    }
}

/// Fields and state as observed together by a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub state: SubmissionState,
}

//! Contact Form Core Library
//!
//! Client-side logic for a portfolio "Contact" form:
//! - field state (`FormFields`) with immutable updates
//! - validation (all fields required, no trimming)
//! - a submission controller with an explicit state machine
//!   (`Idle → Invalid | Submitting → Success | Failed`)
//!
//! The library renders nothing. A view layer edits fields, calls `submit()`,
//! and renders the `SubmissionState` it reads back or observes through
//! `subscribe()`.
//!
//! ```rust,no_run
//! use contact_form_core::{FieldName, FormConfig, FormSubmissionController};
//!
//! # async fn example() -> contact_form_core::CoreResult<()> {
//! let config = FormConfig::default().with_endpoint("https://example.com/");
//! let controller = FormSubmissionController::from_config(config)?;
//!
//! controller.update_field(FieldName::Name, "Ada");
//! controller.update_field(FieldName::Email, "ada@example.com");
//! controller.update_field(FieldName::Message, "Hello!");
//!
//! let state = controller.submit().await;
//! if let Some(text) = state.user_message() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::FormConfig;
pub use controller::FormSubmissionController;
pub use error::{CoreError, CoreResult, TransportError, ValidationError};
pub use types::{FieldName, FormFields, FormSnapshot, SubmissionState};

// Re-export transport layer for custom transports
pub use contact_form_transport::{FormPayload, FormTransport};

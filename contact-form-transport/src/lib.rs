//! # contact-form-transport
//!
//! Wire layer for submitting a contact form: an ordered urlencoded payload,
//! the [`FormTransport`] abstraction, and an HTTP POST implementation.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use contact_form_transport::{FormPayload, FormTransport, HttpFormTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpFormTransport::new("https://example.com/")?;
//!
//!     let payload = FormPayload::from_pairs([
//!         ("form-name", "contact"),
//!         ("bot-field", ""),
//!         ("name", "Ada"),
//!         ("email", "ada@example.com"),
//!         ("message", "Hello!"),
//!     ]);
//!     transport.send(&payload).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every send returns [`Result<(), TransportError>`](TransportError):
//!
//! - [`TransportError::Network`] — the request never completed
//! - [`TransportError::Timeout`] — the request ran past its ceiling
//! - [`TransportError::Status`] — the endpoint answered 4xx/5xx
//!
//! Nothing is retried; a send is exactly one request.

mod error;
mod http_client;
mod http_transport;
mod payload;
mod traits;
mod utils;

pub use error::{Result, TransportError};

pub use http_transport::{HttpFormTransport, parse_endpoint};

pub use payload::{CONTENT_TYPE, FormPayload};

pub use traits::FormTransport;

pub use utils::log_sanitizer;

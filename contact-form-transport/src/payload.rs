//! `application/x-www-form-urlencoded` payloads
//!
//! A payload is an ordered list of key/value pairs. Order is part of the
//! contract: the body lists pairs in the order they were pushed, and decoding
//! preserves it.

use serde::Serialize;

use crate::error::{Result, TransportError};

/// Content type sent with every submission.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered key/value pairs of a form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    pairs: Vec<(String, String)>,
}

impl FormPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a payload from pairs, keeping their order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Appends a pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in order, for logging without exposing values.
    pub fn keys(&self) -> Vec<&str> {
        self.pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes to a urlencoded body (`k=v&k=v`).
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parses a urlencoded body.
    ///
    /// `+` is read as a space. Empty segments (`a=1&&b=2`) are skipped.
    pub fn decode(body: &str) -> Result<Self> {
        let mut payload = Self::new();
        for segment in body.split('&').filter(|s| !s.is_empty()) {
            let Some((key, value)) = segment.split_once('=') else {
                return Err(TransportError::Decode {
                    detail: format!("pair without '=': {segment}"),
                });
            };
            payload.push(decode_component(key)?, decode_component(value)?);
        }
        Ok(payload)
    }
}

fn decode_component(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| TransportError::Decode {
            detail: format!("invalid UTF-8 in '{raw}': {e}"),
        })
}

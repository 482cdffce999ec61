//! Log sanitization utilities
//!
//! Endpoints answer failed submissions with whole HTML pages or echo the
//! posted form back; only a prefix of such bodies goes into logs.

/// Byte budget for a body excerpt in logs.
const LOG_EXCERPT_BYTES: usize = 256;

/// Shortens `body` to at most [`LOG_EXCERPT_BYTES`] bytes, cut on a char
/// boundary, and notes the full size when anything was dropped.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_EXCERPT_BYTES {
        return body.to_string();
    }

    let cut = body
        .char_indices()
        .map(|(start, ch)| start + ch.len_utf8())
        .take_while(|end| *end <= LOG_EXCERPT_BYTES)
        .last()
        .unwrap_or(0);

    format!("{}... [{} of {} bytes]", &body[..cut], cut, body.len())
}

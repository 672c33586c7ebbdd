//! Local checks run before anything touches the network.

use crate::error::ChatError;
use crate::message::OutgoingMessage;

/// A field counts as filled when something other than whitespace remains.
pub fn is_filled(field: &str) -> bool {
    !field.trim().is_empty()
}

/// Validate the send form and build the outgoing payload.
///
/// Values are sent as typed; trimming only decides whether a field is blank.
pub fn validate_send(from: &str, to: &str, body: &str) -> Result<OutgoingMessage, ChatError> {
    if !is_filled(body) || !is_filled(to) || !is_filled(from) {
        return Err(ChatError::Validation);
    }

    Ok(OutgoingMessage {
        from: from.to_string(),
        to: to.to_string(),
        body: body.to_string(),
    })
}

/// Validate a store base address (`http://` or `https://` plus a host).
pub fn validate_base_url(url: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| format!("Base URL must start with http:// or https://: {}", url))?;

    if rest.trim_end_matches('/').is_empty() {
        return Err("Base URL is missing a host".to_string());
    }

    if url.contains(char::is_whitespace) {
        return Err("Base URL cannot contain whitespace".to_string());
    }

    Ok(())
}

//! Request authentication for incoming Patreon webhooks.
//!
//! Patreon signs every delivery with an HMAC-MD5 of the raw body, keyed with
//! the webhook secret, and sends the lowercase hex digest in
//! [`SIGNATURE_HEADER`]. MD5 is fixed by the sender and cannot be swapped for
//! a stronger digest without breaking interoperability.

use std::collections::HashMap;
use std::io::Read;

use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use md5::Md5;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::decode::{Webhook, decode};
use crate::error::{Result, WebhookError};
use crate::event::EventKind;

type HmacMd5 = Hmac<Md5>;

pub const EVENT_HEADER: &str = "X-Patreon-Event";
pub const SIGNATURE_HEADER: &str = "X-Patreon-Signature";

/// Read access to request headers, independent of the HTTP stack in use.
///
/// Lookups are case-insensitive.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A delivery whose body matched its signature.
///
/// Holds the exact bytes that were authenticated, so decoding never sees a
/// re-serialized copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified {
    body: Vec<u8>,
    event: String,
}

impl Verified {
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The event header, unmodified.
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn event_kind(&self) -> EventKind {
        EventKind::from(self.event.as_str())
    }

    pub fn decode(&self) -> Result<Webhook> {
        decode(&self.body)
    }

    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.body, self.event)
    }
}

/// Authenticates a delivery: checks both headers are present, reads the
/// whole body and compares its signature against [`SIGNATURE_HEADER`].
///
/// The body is not touched when a header is missing.
#[tracing::instrument(skip_all)]
pub fn authenticate<H, R>(headers: &H, mut body: R, secret: &str) -> Result<Verified>
where
    H: HeaderSource + ?Sized,
    R: Read,
{
    let event = headers.header(EVENT_HEADER).filter(|v| !v.is_empty());
    let signature = headers.header(SIGNATURE_HEADER).filter(|v| !v.is_empty());
    let (Some(event), Some(signature)) = (event, signature) else {
        return Err(WebhookError::MissingHeaders);
    };

    let mut raw = Vec::new();
    body.read_to_end(&mut raw)?;

    verify_signature(&raw, signature, secret)?;
    debug!(event, bytes = raw.len(), "webhook signature verified");

    Ok(Verified {
        body: raw,
        event: event.to_owned(),
    })
}

/// Lowercase hex HMAC-MD5 of `body` keyed with `secret`.
pub fn sign(body: &[u8], secret: &str) -> Result<String> {
    let mut mac =
        HmacMd5::new_from_slice(secret.as_bytes()).map_err(|_| WebhookError::InvalidSecret)?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks `signature` against the expected digest of `body`.
///
/// Comparison runs in constant time over the hex text, so an uppercase or
/// otherwise re-encoded signature is a mismatch.
pub fn verify_signature(body: &[u8], signature: &str, secret: &str) -> Result<()> {
    let expected = sign(body, secret)?;
    if bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
        Ok(())
    } else {
        Err(WebhookError::SignatureMismatch)
    }
}

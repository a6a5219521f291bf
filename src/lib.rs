//! Verification and decoding of Patreon webhook deliveries.
//!
//! [`authenticate`] checks a request's signature against the shared secret
//! and hands back the exact bytes it verified; [`decode`] turns those bytes
//! into a [`Webhook`] with the campaign, user, rewards, tiers and goals the
//! sender included.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! # fn run(headers: HashMap<String, String>, body: &[u8]) -> patreon_webhooks::Result<()> {
//! let verified = patreon_webhooks::authenticate(&headers, body, "secret")?;
//! let webhook = verified.decode()?;
//! println!("{} for member {}", verified.event_kind(), webhook.data.id);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod decode;
pub mod error;
pub mod event;
pub mod models;
pub mod routes;

pub use auth::{
    EVENT_HEADER, HeaderSource, SIGNATURE_HEADER, Verified, authenticate, sign, verify_signature,
};
pub use decode::{EntityKind, Included, Webhook, decode};
pub use error::{Result, WebhookError};
pub use event::EventKind;

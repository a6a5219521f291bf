use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebhookError>;

/// Everything that can stop a delivery from being authenticated or decoded.
///
/// Errors are returned to the caller as-is; nothing in this crate retries,
/// suppresses or logs them.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("missing event or signature headers")]
    MissingHeaders,

    #[error("failed to read webhook body")]
    Io(#[from] std::io::Error),

    #[error("signature does not match")]
    SignatureMismatch,

    /// The MAC could not be keyed with the secret. HMAC accepts keys of any
    /// length, so HMAC-MD5 never produces this; the MAC constructor is
    /// fallible and this keeps [`crate::sign`] free of panics.
    #[error("invalid webhook secret")]
    InvalidSecret,

    #[error("malformed webhook payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// An `included` entry carried a `type` we have no shape for.
    #[error("the webhook has data we do not handle: unknown entity kind `{0}`")]
    UnknownEntityKind(String),
}

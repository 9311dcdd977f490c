//! Unified SDK error types.

use thiserror::Error;

/// API-facing errors, strictly layered by how far the exchange got.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failed before a response was obtained. The underlying
    /// `reqwest` cause is kept as `source` for diagnostics only; callers
    /// branch on the kind, not on the cause.
    #[error("error communicating with the AZCaptcha API")]
    Communication(#[source] reqwest::Error),

    /// A response was obtained but did not parse as expected.
    #[error("unexpected response format: {0}")]
    ResponseFormat(String),

    /// The service responded with a well-formed failure code.
    #[error("operation failed: {code:?}")]
    OperationFailed { code: String },

    /// Reading a path-based captcha image failed before any network
    /// interaction.
    #[error("failed to read captcha image")]
    Image(#[from] std::io::Error),
}

/// Ticket-level errors: local usage errors plus the API kinds.
///
/// `NotResolved` and `AlreadyReported` are raised synchronously, with no
/// network call issued.
#[derive(Error, Debug)]
pub enum TicketError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no captcha result has been retrieved yet")]
    NotResolved,

    #[error("captcha was already reported as bad")]
    AlreadyReported,
}

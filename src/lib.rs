//! # AZCaptcha SDK
//!
//! An async Rust client for the AZCaptcha captcha-solving service: submit
//! an image, poll for the solved text, optionally report a bad result.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Errors** — the API-facing error taxonomy plus local ticket usage errors
//! 2. **HTTP** — the transport adapter and the bounded poll retry
//! 3. **Captcha domain** — submit inputs, response grammar, the ticket state machine
//! 4. **High-Level Client** — `AzCaptchaClient`, the entry point
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use azcaptcha_sdk::prelude::*;
//!
//! let client = AzCaptchaClient::new("api-key");
//! let mut ticket = client.submit(CaptchaImage::Path("captcha.jpg".into())).await?;
//! let text = ticket.await_result().await?;
//! ```

// ── Layer 1: Errors ──────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Transport adapter and retry budget.
pub mod http;

// ── Layer 3: Captcha domain ──────────────────────────────────────────────────

/// Submit inputs, response grammar, and the ticket.
pub mod captcha;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `AzCaptchaClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::captcha::ticket::{CaptchaTicket, DEFAULT_POLL_INTERVAL};
    pub use crate::captcha::{CaptchaImage, SubmitParams};
    pub use crate::client::{AzCaptchaClient, AzCaptchaClientBuilder};
    pub use crate::error::{ApiError, TicketError};
    pub use crate::http::RetryConfig;
    pub use crate::network::DEFAULT_BASE_URL;
}

//! HTTP layer: the transport adapter and the bounded poll retry.

pub(crate) mod client;
pub mod retry;

pub(crate) use client::AzHttp;
pub use retry::RetryConfig;

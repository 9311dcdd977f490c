//! Captcha domain: submit inputs, the response grammar, and the ticket.

pub mod ticket;
pub(crate) mod wire;

pub use ticket::CaptchaTicket;

use std::path::{Path, PathBuf};

use crate::error::ApiError;

/// Image input for a submit call: a file path or bytes already in memory.
///
/// Path inputs are fully read into memory before upload; the upload itself
/// never streams.
#[derive(Debug, Clone)]
pub enum CaptchaImage {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl CaptchaImage {
    pub(crate) async fn into_bytes(self) -> Result<Vec<u8>, ApiError> {
        match self {
            CaptchaImage::Path(path) => Ok(tokio::fs::read(path).await?),
            CaptchaImage::Bytes(bytes) => Ok(bytes),
        }
    }
}

impl From<PathBuf> for CaptchaImage {
    fn from(path: PathBuf) -> Self {
        CaptchaImage::Path(path)
    }
}

impl From<&Path> for CaptchaImage {
    fn from(path: &Path) -> Self {
        CaptchaImage::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for CaptchaImage {
    fn from(bytes: Vec<u8>) -> Self {
        CaptchaImage::Bytes(bytes)
    }
}

impl From<&[u8]> for CaptchaImage {
    fn from(bytes: &[u8]) -> Self {
        CaptchaImage::Bytes(bytes.to_vec())
    }
}

/// Parameter set for a submit call.
///
/// Defaults to `method=post` (plain file upload). [`SubmitParams::set`]
/// replaces an existing entry, so caller-supplied values override the
/// default. For the accepted keys see "Additional CAPTCHA parameters" in
/// the service documentation.
#[derive(Debug, Clone)]
pub struct SubmitParams {
    fields: Vec<(String, String)>,
}

impl Default for SubmitParams {
    fn default() -> Self {
        Self {
            fields: vec![("method".to_string(), "post".to_string())],
        }
    }
}

impl SubmitParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any existing entry for `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    pub(crate) fn into_form(self, image: Vec<u8>) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for (k, v) in self.fields {
            form = form.text(k, v);
        }
        form.part("file", reqwest::multipart::Part::bytes(image))
    }
}

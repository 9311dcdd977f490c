//! High-level client — `AzCaptchaClient` with its builder and the domain
//! accessor methods.

use chrono::NaiveDate;

use crate::captcha::wire;
use crate::captcha::{CaptchaImage, CaptchaTicket, SubmitParams};
use crate::error::ApiError;
use crate::http::{AzHttp, RetryConfig};
use crate::network::{DEFAULT_BASE_URL, LOAD_PATH, RESULT_PATH, SUBMIT_PATH};

/// The primary entry point for the AZCaptcha SDK.
///
/// Immutable after construction; one instance may serve concurrent
/// requests.
#[derive(Debug)]
pub struct AzCaptchaClient {
    http: AzHttp,
    retry: RetryConfig,
}

impl AzCaptchaClient {
    /// Client for the public service with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> AzCaptchaClientBuilder {
        AzCaptchaClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &AzHttp {
        &self.http
    }

    pub(crate) fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    /// Queue a captcha for solving with the default parameter set
    /// (`method=post`).
    pub async fn submit(
        &self,
        image: impl Into<CaptchaImage>,
    ) -> Result<CaptchaTicket<'_>, ApiError> {
        self.submit_with(image, SubmitParams::default()).await
    }

    /// Queue a captcha for solving. Caller-supplied `params` override the
    /// defaults.
    pub async fn submit_with(
        &self,
        image: impl Into<CaptchaImage>,
        params: SubmitParams,
    ) -> Result<CaptchaTicket<'_>, ApiError> {
        let bytes = image.into().into_bytes().await?;
        let form = params.into_form(bytes);
        let body = self.http.post_multipart(SUBMIT_PATH, form).await?;
        let id = wire::parse_submit(&body)?;
        tracing::debug!(%id, "captcha queued");
        Ok(CaptchaTicket::new(self, id))
    }

    /// Account balance, in account currency.
    pub async fn balance(&self) -> Result<f64, ApiError> {
        let body = self
            .http
            .get_text(RESULT_PATH, &[("action", "getbalance")])
            .await?;
        wire::parse_balance(&body)
    }

    /// Account statistics for `date`, as raw XML.
    pub async fn stats(&self, date: NaiveDate) -> Result<String, ApiError> {
        let date = date.format("%Y-%m-%d").to_string();
        self.http
            .get_text(RESULT_PATH, &[("action", "getstats"), ("date", &date)])
            .await
    }

    /// Server load statistics, as raw text.
    pub async fn load(&self) -> Result<String, ApiError> {
        self.http.get_text(LOAD_PATH, &[]).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AzCaptchaClientBuilder {
    api_key: String,
    base_url: String,
    retry: RetryConfig,
}

impl Default for AzCaptchaClientBuilder {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryConfig::default(),
        }
    }
}

impl AzCaptchaClientBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Point the client at a different deployment.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Retry budget for poll requests.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> AzCaptchaClient {
        AzCaptchaClient {
            http: AzHttp::new(&self.base_url, self.api_key),
            retry: self.retry,
        }
    }
}

//! In-flight captcha ticket — the poll-for-result state machine.

use std::time::Duration;

use crate::captcha::wire::{self, PollReply};
use crate::client::AzCaptchaClient;
use crate::error::{ApiError, TicketError};
use crate::http::retry::with_retry;
use crate::network::RESULT_PATH;

/// Default sleep between [`CaptchaTicket::await_result`] polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A captcha queued for solving, identified by a service-assigned id.
///
/// Created by [`AzCaptchaClient::submit`]. The solved text is memoized on
/// first retrieval; dropping the ticket ends its lifecycle (the service has
/// no close/cancel protocol). Methods that advance ticket state take
/// `&mut self`; drive each ticket from a single logical caller.
#[derive(Debug)]
pub struct CaptchaTicket<'a> {
    client: &'a AzCaptchaClient,
    id: String,
    cached_result: Option<String>,
    reported_bad: bool,
}

impl<'a> CaptchaTicket<'a> {
    pub(crate) fn new(client: &'a AzCaptchaClient, id: String) -> Self {
        Self {
            client,
            id,
            cached_result: None,
            reported_bad: false,
        }
    }

    /// The service-assigned captcha id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The memoized result, if one has been retrieved.
    pub fn result(&self) -> Option<&str> {
        self.cached_result.as_deref()
    }

    /// Try to obtain the captcha text once. Returns `None` while the
    /// service is still solving.
    ///
    /// A resolved ticket answers from its cache without touching the
    /// network. An unresolved one polls the result endpoint under the
    /// client's retry budget: a failed attempt (any error kind) is retried,
    /// while a not-ready reply returns `None` immediately so the caller's
    /// own polling loop decides whether to keep waiting.
    pub async fn try_get_result(&mut self) -> Result<Option<String>, ApiError> {
        if self.cached_result.is_some() {
            return Ok(self.cached_result.clone());
        }

        let outcome = with_retry(self.client.retry(), || self.poll_once()).await?;
        if let Some(text) = &outcome {
            tracing::debug!(id = %self.id, "captcha resolved");
            self.cached_result = Some(text.clone());
        }
        Ok(outcome)
    }

    async fn poll_once(&self) -> Result<Option<String>, ApiError> {
        let body = self
            .client
            .http()
            .get_text(RESULT_PATH, &[("action", "get"), ("id", &self.id)])
            .await?;

        match wire::parse_poll(&body) {
            PollReply::Ready(text) => Ok(Some(text)),
            PollReply::NotReady => {
                tracing::debug!(id = %self.id, "captcha not ready");
                Ok(None)
            }
            PollReply::Refused(code) => Err(ApiError::OperationFailed { code }),
        }
    }

    /// Poll every [`DEFAULT_POLL_INTERVAL`] until the captcha is solved.
    pub async fn await_result(&mut self) -> Result<String, ApiError> {
        self.await_result_every(DEFAULT_POLL_INTERVAL).await
    }

    /// Poll every `poll_interval` until the captcha is solved.
    ///
    /// Suspends cooperatively between polls; cancel by dropping the future.
    /// No overall deadline is imposed here.
    pub async fn await_result_every(
        &mut self,
        poll_interval: Duration,
    ) -> Result<String, ApiError> {
        loop {
            if let Some(text) = self.try_get_result().await? {
                return Ok(text);
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Report a confirmed-wrong result back to the service.
    ///
    /// One shot: requires a retrieved result and may only be called once.
    /// Both misuses fail locally, before any network call.
    pub async fn report_bad(&mut self) -> Result<(), TicketError> {
        if self.cached_result.is_none() {
            return Err(TicketError::NotResolved);
        }
        if self.reported_bad {
            return Err(TicketError::AlreadyReported);
        }

        let outcome = self
            .client
            .http()
            .get_text(RESULT_PATH, &[("action", "reportbad"), ("id", &self.id)])
            .await;
        // The report counts as spent once the request has gone out, whatever
        // comes back.
        self.reported_bad = true;

        let body = outcome?;
        if body != wire::REPORT_RECORDED {
            return Err(
                ApiError::ResponseFormat(format!("unexpected reportbad reply: {body:?}")).into(),
            );
        }
        tracing::debug!(id = %self.id, "reported bad captcha");
        Ok(())
    }
}

//! Line-oriented response grammar for the submit and result endpoints.
//!
//! Success bodies are `"OK|" + payload`; the pipe is the sole structural
//! marker, and its presence anywhere in the body is what marks success.
//! Everything else is an uppercase sentinel or failure code. A failure code
//! that contained a pipe would therefore be misread as success; the live
//! service never emits one, and this grammar is kept bug-compatible with it.

use crate::error::ApiError;

/// Delimiter separating the `OK` marker from the payload.
pub(crate) const DELIMITER: char = '|';

/// Not-ready sentinels. The second spelling is a known typo in the live
/// service; both mean the same thing.
pub(crate) const NOT_READY: [&str; 2] = ["CAPTCHA_NOT_READY", "CAPCHA_NOT_READY"];

/// Exact body acknowledging a reportbad request.
pub(crate) const REPORT_RECORDED: &str = "OK_REPORT_RECORDED";

/// Outcome of one poll of the result endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PollReply {
    /// Solved; the payload has been HTML-entity-unescaped.
    Ready(String),
    /// Still being worked on.
    NotReady,
    /// Explicit refusal code.
    Refused(String),
}

/// Interpret a submit response: the text after the first delimiter is the
/// new ticket id; a body without a delimiter is a failure code.
pub(crate) fn parse_submit(body: &str) -> Result<String, ApiError> {
    match body.split_once(DELIMITER) {
        Some((_, id)) => Ok(id.to_string()),
        None => Err(ApiError::OperationFailed {
            code: body.to_string(),
        }),
    }
}

/// Interpret a poll response.
pub(crate) fn parse_poll(body: &str) -> PollReply {
    if let Some((_, text)) = body.split_once(DELIMITER) {
        return PollReply::Ready(html_escape::decode_html_entities(text).into_owned());
    }
    if NOT_READY.contains(&body) {
        return PollReply::NotReady;
    }
    PollReply::Refused(body.to_string())
}

/// Parse a balance body as a decimal number. Surrounding whitespace is
/// tolerated.
pub(crate) fn parse_balance(body: &str) -> Result<f64, ApiError> {
    body.trim()
        .parse()
        .map_err(|_| ApiError::ResponseFormat(format!("not a balance: {body:?}")))
}

//! Network URL constants for the AZCaptcha SDK.

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://azcaptcha.com";

/// Captcha submission endpoint (multipart POST).
pub(crate) const SUBMIT_PATH: &str = "/in.php";

/// Result/balance/stats/report endpoint.
pub(crate) const RESULT_PATH: &str = "/res.php";

/// Server load endpoint.
pub(crate) const LOAD_PATH: &str = "/load.php";

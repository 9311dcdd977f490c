//! Low-level HTTP transport — `AzHttp`.
//!
//! Every outbound request flows through this adapter: the API key is
//! injected, the response body is read as text, and any transport failure
//! is classified as [`ApiError::Communication`] right here, beneath any
//! retry wrapper. The service signals refusals in-body with a 200 status,
//! so status codes are not branched on.

use reqwest::multipart::Form;
use reqwest::Client;

use crate::error::ApiError;

#[derive(Debug)]
pub(crate) struct AzHttp {
    base_url: String,
    client: Client,
    api_key: String,
}

impl AzHttp {
    pub(crate) fn new(base_url: &str, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// GET `path` with `params` plus the API key; returns the body as text.
    pub(crate) async fn get_text(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let resp = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(ApiError::Communication)?;
        resp.text().await.map_err(ApiError::Communication)
    }

    /// POST a multipart form to `path` with the API key appended as a form
    /// field; returns the body as text.
    pub(crate) async fn post_multipart(&self, path: &str, form: Form) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST (multipart)");
        let form = form.text("key", self.api_key.clone());
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::Communication)?;
        resp.text().await.map_err(ApiError::Communication)
    }
}

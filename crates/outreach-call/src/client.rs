//! HTTP client for the call-automation backend.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::CallError;
use crate::types::{CallInitiated, CallRequest, CallStatusReport, MakeCallResponse};

/// Client for the call-automation backend.
///
/// Holds the HTTP client and base URL. Point `base_url` at a mock
/// server in tests. Cloning is cheap; watcher tasks take their own
/// clone.
#[derive(Clone)]
pub struct CallClient {
    client: Client,
    base_url: Url,
}

impl CallClient {
    /// Creates a new client for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CallError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CallError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| CallError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Submits a call request (`POST /make-call`, form-encoded).
    ///
    /// # Errors
    ///
    /// - [`CallError::Rejected`] when the backend answers
    ///   `success: false` or accepts without a call identifier.
    /// - [`CallError::Http`] on network failure or non-2xx HTTP status.
    /// - [`CallError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn make_call(&self, request: &CallRequest) -> Result<CallInitiated, CallError> {
        let url = self.join("make-call")?;
        let response = self.client.post(url.clone()).form(request).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: MakeCallResponse =
            serde_json::from_str(&body).map_err(|e| CallError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        if !parsed.success {
            return Err(CallError::Rejected(
                parsed.message.unwrap_or_else(|| "no reason given".to_owned()),
            ));
        }
        let call_sid = parsed
            .call_sid
            .filter(|sid| !sid.is_empty())
            .ok_or_else(|| CallError::Rejected("accepted without a call_sid".to_owned()))?;

        tracing::info!(call_sid = %call_sid, business = %request.business_name, "call submitted");
        Ok(CallInitiated { call_sid })
    }

    /// Fetches the current status of a call (`GET /call-status/{sid}`).
    ///
    /// # Errors
    ///
    /// - [`CallError::Http`] on network failure or non-2xx HTTP status.
    /// - [`CallError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn call_status(&self, call_sid: &str) -> Result<CallStatusReport, CallError> {
        let mut url = self.join("call-status")?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| CallError::ApiError("base URL cannot be a base".to_owned()))?;
            segments.push(call_sid);
        }
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CallError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    fn join(&self, segment: &str) -> Result<Url, CallError> {
        self.base_url
            .join(segment)
            .map_err(|e| CallError::ApiError(format!("invalid URL segment '{segment}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_builds_endpoint_urls() {
        let client = CallClient::new("http://localhost:8001/", 30, "outreach-test/0.1").unwrap();
        assert_eq!(
            client.join("make-call").unwrap().as_str(),
            "http://localhost:8001/make-call"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = CallClient::new("not a url", 30, "outreach-test/0.1");
        assert!(matches!(result, Err(CallError::ApiError(_))));
    }
}

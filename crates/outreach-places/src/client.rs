//! HTTP client for the places-search backend.
//!
//! Wraps `reqwest` with typed response deserialization. The backend is
//! the workspace's own proxy in front of the upstream places provider;
//! one dashboard search maps to exactly one request here.

use std::time::Duration;

use reqwest::{Client, Url};

use outreach_core::SearchParams;

use crate::error::PlacesError;
use crate::types::{PlaceRecord, PlacesResponse};

/// Client for the places-search backend.
///
/// Holds the HTTP client and base URL. Point `base_url` at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so
        // joins resolve against the root path rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| PlacesError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches nearby businesses for the given search parameters.
    ///
    /// Issues a single `GET /places` request with the location text, the
    /// radius converted to whole meters, and the keyword when present.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected `{ "results": [...] }` envelope.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<PlaceRecord>, PlacesError> {
        let url = self.build_url(params)?;
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: PlacesResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        Ok(envelope.results)
    }

    /// Builds the `/places` URL with percent-encoded query parameters.
    fn build_url(&self, params: &SearchParams) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join("places")
            .map_err(|e| PlacesError::ApiError(format!("invalid places URL: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("location", &params.location);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            pairs.append_pair("radius", &(params.radius_meters().round() as u64).to_string());
            if let Some(keyword) = params.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
                pairs.append_pair("keyword", keyword);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> PlacesClient {
        PlacesClient::new(base_url, 30, "outreach-test/0.1")
            .expect("client construction should not fail")
    }

    fn params(location: &str, radius_km: f64, keyword: Option<&str>) -> SearchParams {
        SearchParams {
            location: location.to_owned(),
            radius_km,
            keyword: keyword.map(str::to_owned),
        }
    }

    #[test]
    fn build_url_converts_radius_to_meters() {
        let client = test_client("http://localhost:8000");
        let url = client
            .build_url(&params("Toronto", 5.0, Some("restaurant")))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/places?location=Toronto&radius=5000&keyword=restaurant"
        );
    }

    #[test]
    fn build_url_omits_empty_keyword() {
        let client = test_client("http://localhost:8000");
        let url = client.build_url(&params("Toronto", 2.0, None)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/places?location=Toronto&radius=2000"
        );
        let url = client.build_url(&params("Toronto", 2.0, Some("  "))).unwrap();
        assert!(!url.as_str().contains("keyword"));
    }

    #[test]
    fn build_url_encodes_location_text() {
        let client = test_client("http://localhost:8000/");
        let url = client
            .build_url(&params("123 Main St & 5th Ave", 1.0, None))
            .unwrap();
        assert!(
            url.as_str().contains("123+Main+St+%26+5th+Ave")
                || url.as_str().contains("123%20Main%20St%20%26%205th%20Ave"),
            "location should be percent-encoded: {url}"
        );
    }
}

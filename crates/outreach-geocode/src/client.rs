//! HTTP client for Mapbox forward geocoding.

use std::time::Duration;

use reqwest::{Client, Url};

use outreach_core::Coordinates;

use crate::error::GeocodeError;
use crate::types::{AddressSuggestion, FeatureCollection};

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/";

/// Queries shorter than this return an empty suggestion list without a
/// network round trip.
pub const MIN_QUERY_LEN: usize = 3;

const SUGGESTION_LIMIT: u8 = 5;

/// Client for the Mapbox forward-geocoding API.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_base_url`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a new client pointed at the production Mapbox API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_token: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(access_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeocodeError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url,
        })
    }

    /// Fetches up to five address/POI suggestions for a partial query.
    ///
    /// Queries below [`MIN_QUERY_LEN`] characters short-circuit to an
    /// empty list without issuing a request.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the response does not match the
    ///   expected feature-collection shape.
    pub async fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>, GeocodeError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let url = self.build_url(query)?;
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("suggest(query={query})"),
                source: e,
            })?;

        Ok(collection
            .features
            .into_iter()
            .map(|f| AddressSuggestion {
                place_name: f.place_name,
                coords: f.center.map(|[lng, lat]| Coordinates { lat, lng }),
            })
            .collect())
    }

    /// Builds the forward-geocoding URL; the query lives in the path
    /// segment, so it is percent-encoded by the join.
    fn build_url(&self, query: &str) -> Result<Url, GeocodeError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| GeocodeError::ApiError("base URL cannot be a base".to_owned()))?;
            segments.pop_if_empty();
            segments.push("geocoding");
            segments.push("v5");
            segments.push("mapbox.places");
            segments.push(&format!("{query}.json"));
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_token", &self.access_token);
            pairs.append_pair("types", "address,poi");
            pairs.append_pair("limit", &SUGGESTION_LIMIT.to_string());
        }
        Ok(url)
    }
}

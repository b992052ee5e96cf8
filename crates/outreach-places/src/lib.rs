//! Client for the places-search backend.
//!
//! Issues the nearby-business lookup, then normalizes the raw wire
//! records into [`outreach_core::Business`] rows and optionally filters
//! out entries without a usable phone number or beyond the requested
//! search radius.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::{filter_businesses, normalize_place};
pub use types::{PlaceRecord, PlacesResponse};

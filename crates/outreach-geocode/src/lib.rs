//! Address autocomplete against the Mapbox forward-geocoding API.
//!
//! Short queries are answered locally with an empty suggestion list so
//! the dashboard can call [`GeocodeClient::suggest`] on every keystroke
//! without spamming the API below the minimum query length.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GeocodeClient, MIN_QUERY_LEN};
pub use error::GeocodeError;
pub use types::AddressSuggestion;

use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /places`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub results: Vec<PlaceRecord>,
}

/// One raw business record off the wire.
///
/// The backend fills `phone` with the sentinel `"N/A"` when the place
/// details lookup yields no number; normalization turns that into
/// `None`. `name` and `address` occasionally come back null upstream,
/// so both default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub phone: Option<String>,
}

use serde::{Deserialize, Serialize};

use outreach_core::Coordinates;

/// One autocomplete candidate ready for the suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub place_name: String,
    /// Present when the feature carried a center point; selecting such a
    /// suggestion also pins the user's coordinates.
    pub coords: Option<Coordinates>,
}

/// Mapbox forward-geocoding response envelope (the parts we read).
#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    pub place_name: String,
    /// `[lng, lat]` per the GeoJSON convention.
    #[serde(default)]
    pub center: Option<[f64; 2]>,
}

//! Derived views: the map scene and the table rows.
//!
//! Pure data for a renderer to consume. The map SDK and the terminal
//! table are external collaborators; everything they need is computed
//! here from the dashboard state.

use outreach_core::{BusinessKey, Coordinates};

/// Everything the map renderer draws for one state snapshot.
#[derive(Debug, Clone)]
pub struct MapScene {
    /// The user's own position marker, when a location is set.
    pub user_marker: Option<Coordinates>,
    /// Closed polygon ring for the search-radius overlay; empty without
    /// a user location.
    pub radius_ring: Vec<Coordinates>,
    pub markers: Vec<MarkerSpec>,
    /// Where the camera should fly: the selected business, else the
    /// user marker.
    pub camera: Option<Coordinates>,
}

/// One business marker, color keyed by hiring status.
#[derive(Debug, Clone)]
pub struct MarkerSpec {
    pub key: BusinessKey,
    pub coords: Coordinates,
    pub color: &'static str,
    pub selected: bool,
}

/// One row of the business table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: BusinessKey,
    pub name: String,
    pub job_role: String,
    pub status: String,
    pub last_contact: String,
    pub selected: bool,
}

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Hiring lifecycle of a business as shown in the table and on the map.
///
/// `Calling` is a transient state held while a call workflow is in
/// flight; a finished poll either promotes it to a terminal state or
/// reverts it to whatever the business showed before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringStatus {
    NotContacted,
    Calling,
    Hiring,
    Maybe,
    NotHiring,
}

impl HiringStatus {
    /// Hex color for the map marker keyed by status.
    #[must_use]
    pub fn marker_color(self) -> &'static str {
        match self {
            HiringStatus::Hiring => "#10b981",
            HiringStatus::Maybe => "#f59e0b",
            HiringStatus::NotHiring => "#ef4444",
            HiringStatus::NotContacted | HiringStatus::Calling => "#6b7280",
        }
    }
}

impl std::fmt::Display for HiringStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HiringStatus::NotContacted => write!(f, "Not Contacted"),
            HiringStatus::Calling => write!(f, "Calling"),
            HiringStatus::Hiring => write!(f, "Hiring"),
            HiringStatus::Maybe => write!(f, "Maybe"),
            HiringStatus::NotHiring => write!(f, "Not Hiring"),
        }
    }
}

/// Tri-state hiring classification reported by the call-analysis backend.
///
/// The backend emits `HIRING`, `NOT_HIRING`, or `UNCERTAIN`; anything
/// else is treated as `Uncertain` rather than rejected, since the field
/// is produced by a language model and occasionally drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringClassification {
    Hiring,
    NotHiring,
    Uncertain,
}

impl HiringClassification {
    /// Parses the backend's string form, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "HIRING" => HiringClassification::Hiring,
            "NOT_HIRING" => HiringClassification::NotHiring,
            _ => HiringClassification::Uncertain,
        }
    }

    /// The display status a completed call imposes on its business.
    #[must_use]
    pub fn display_status(self) -> HiringStatus {
        match self {
            HiringClassification::Hiring => HiringStatus::Hiring,
            HiringClassification::NotHiring => HiringStatus::NotHiring,
            HiringClassification::Uncertain => HiringStatus::Maybe,
        }
    }
}

/// Employment type preference carried into the call script context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    Any,
    FullTime,
    PartTime,
    Contract,
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentType::Any => write!(f, "Any"),
            EmploymentType::FullTime => write!(f, "Full-time"),
            EmploymentType::PartTime => write!(f, "Part-time"),
            EmploymentType::Contract => write!(f, "Contract"),
        }
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(EmploymentType::Any),
            "full-time" | "fulltime" | "full_time" => Ok(EmploymentType::FullTime),
            "part-time" | "parttime" | "part_time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            other => Err(format!("unknown employment type: {other}")),
        }
    }
}

/// Identity key for a business within one search result set.
///
/// Synthesized from the business name and its index in the fetched list
/// because the places backend issues no stable identifier. Keys are only
/// meaningful within a single result generation; a new search replaces
/// the whole keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessKey(String);

impl BusinessKey {
    #[must_use]
    pub fn synthesize(name: &str, index: usize) -> Self {
        Self(format!("{name}#{index}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BusinessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One business row as displayed in the table and drawn on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub key: BusinessKey,
    pub name: String,
    pub address: String,
    pub coords: Coordinates,
    /// `None` when the backend reported no usable number.
    pub phone: Option<String>,
    pub job_role: String,
    pub status: HiringStatus,
    /// Display string: "Never" until a call completes, then the
    /// completion date.
    pub last_contact: String,
}

impl Business {
    /// Whether this business can be called at all.
    #[must_use]
    pub fn has_usable_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
    }
}

/// Search criteria collected from the preferences panel.
///
/// The radius is kilometers throughout the UI layer; it is converted to
/// meters only at the backend boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub location: String,
    pub radius_km: f64,
    pub keyword: Option<String>,
}

impl SearchParams {
    /// Radius in meters, as the places backend expects it.
    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        self.radius_km * 1000.0
    }
}

/// The user's own position: a coordinate pair plus a free-text address.
///
/// The two halves are independently mutable — picking an autocomplete
/// suggestion updates both, while typing a raw address updates only the
/// text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub coords: Coordinates,
    pub address: String,
}

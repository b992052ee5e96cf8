use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use outreach_core::HiringClassification;

/// Form payload for `POST /make-call`.
///
/// The contextual fields feed the backend's call script: which role and
/// employment type to ask about, and where.
#[derive(Debug, Clone, Serialize)]
pub struct CallRequest {
    pub phone_number: String,
    pub business_name: String,
    pub role: String,
    pub employment_type: String,
    pub location: String,
}

/// Wire shape of the `POST /make-call` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MakeCallResponse {
    pub success: bool,
    #[serde(default)]
    pub call_sid: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// An accepted call submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInitiated {
    pub call_sid: String,
}

/// Wire shape of `GET /call-status/{sid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallStatusReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub hiring_status: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl CallStatusReport {
    /// Whether the call has finished; only then is the classification
    /// meaningful.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.eq_ignore_ascii_case("completed")
    }
}

/// The merged result of a finished call, ready to apply to a business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    pub call_sid: String,
    pub classification: HiringClassification,
    /// `YYYY-MM-DD` display string for the last-verified column.
    pub completed_at: String,
}

/// Formats a backend completion timestamp as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 datetimes or bare dates; anything unparseable (or
/// absent — some backend revisions omit the field) falls back to today.
#[must_use]
pub fn format_completion_date(raw: Option<&str>) -> String {
    if let Some(raw) = raw {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.date_naive().format("%Y-%m-%d").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_status_is_case_insensitive() {
        let report = CallStatusReport {
            status: "Completed".to_owned(),
            hiring_status: None,
            completed_at: None,
        };
        assert!(report.is_terminal());
        let report = CallStatusReport {
            status: "in-progress".to_owned(),
            hiring_status: None,
            completed_at: None,
        };
        assert!(!report.is_terminal());
    }

    #[test]
    fn completion_date_from_rfc3339() {
        assert_eq!(
            format_completion_date(Some("2025-11-02T17:45:00Z")),
            "2025-11-02"
        );
    }

    #[test]
    fn completion_date_from_bare_date() {
        assert_eq!(format_completion_date(Some("2025-11-02")), "2025-11-02");
    }

    #[test]
    fn completion_date_falls_back_to_today() {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(format_completion_date(None), today);
        assert_eq!(format_completion_date(Some("not a date")), today);
    }
}

//! Normalization from raw place records to [`outreach_core::Business`] rows.
//!
//! The wire records carry no identity, role, or contact history; this
//! module synthesizes the key, assigns the job-role label, and seeds the
//! display fields for a business that has never been contacted.

use outreach_core::geo::{self, Coordinates};
use outreach_core::{Business, BusinessKey, HiringStatus};

use crate::types::PlaceRecord;

/// Job role shown when the search had no keyword to derive one from.
const DEFAULT_JOB_ROLE: &str = "General staff";

/// Sentinel the backend uses for places without a phone number.
const PHONE_ABSENT_SENTINEL: &str = "N/A";

/// Normalizes one raw [`PlaceRecord`] into a [`Business`].
///
/// `index` is the record's position in the fetched list and feeds the
/// synthesized identity key. The `keyword` the search ran with becomes
/// the job-role label; a keyword-less search falls back to
/// `"General staff"`.
#[must_use]
pub fn normalize_place(record: PlaceRecord, index: usize, keyword: Option<&str>) -> Business {
    let phone = record
        .phone
        .filter(|p| !p.trim().is_empty() && p != PHONE_ABSENT_SENTINEL);

    let job_role = keyword
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .unwrap_or(DEFAULT_JOB_ROLE)
        .to_owned();

    Business {
        key: BusinessKey::synthesize(&record.name, index),
        name: record.name,
        address: record.address,
        coords: Coordinates {
            lat: record.lat,
            lng: record.lng,
        },
        phone,
        job_role,
        status: HiringStatus::NotContacted,
        last_contact: "Never".to_owned(),
    }
}

/// Drops businesses that cannot be called or that fall outside the
/// search radius.
///
/// A business survives when it has a usable phone number and, if the
/// search center is known, its great-circle distance from that center is
/// within `radius_meters`. Without a center the distance check is
/// skipped — the backend already searched around the right point, we
/// just cannot re-verify it.
#[must_use]
pub fn filter_businesses(
    businesses: Vec<Business>,
    center: Option<Coordinates>,
    radius_meters: f64,
) -> Vec<Business> {
    let before = businesses.len();
    let kept: Vec<Business> = businesses
        .into_iter()
        .filter(|b| {
            if !b.has_usable_phone() {
                return false;
            }
            match center {
                Some(c) => geo::within_radius(c, b.coords, radius_meters),
                None => true,
            }
        })
        .collect();

    if kept.len() < before {
        tracing::debug!(
            dropped = before - kept.len(),
            kept = kept.len(),
            "filtered businesses without phone or beyond radius"
        );
    }
    kept
}

use thiserror::Error;

use outreach_core::BusinessKey;

/// Errors surfaced by dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The search fetch failed; the business list has been cleared.
    #[error("search failed: {0}")]
    Search(#[from] outreach_places::PlacesError),

    /// The call backend rejected or failed a submission.
    #[error("call failed: {0}")]
    Call(#[from] outreach_call::CallError),

    /// The referenced business is not in the current result set.
    #[error("unknown business: {0}")]
    UnknownBusiness(BusinessKey),

    /// The business has no usable phone number to call.
    #[error("business has no usable phone number: {0}")]
    NoPhone(BusinessKey),
}

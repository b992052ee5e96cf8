//! Dashboard state and the operations that mutate it.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use outreach_call::{poll_outcome, CallClient, CallOutcome, CallRequest, PollConfig, PollResult};
use outreach_core::geo::circle_polygon;
use outreach_core::{
    AppConfig, Business, BusinessKey, Coordinates, EmploymentType, HiringStatus, SearchParams,
    UserLocation,
};
use outreach_geocode::AddressSuggestion;
use outreach_places::{filter_businesses, normalize_place, PlaceRecord, PlacesClient, PlacesError};

use crate::error::DashboardError;
use crate::view::{MapScene, MarkerSpec, TableRow};

const RADIUS_RING_STEPS: usize = 64;

/// Search criteria as collected by the preferences panel.
#[derive(Debug, Clone)]
pub struct Preferences {
    pub location: String,
    pub radius_km: f64,
    pub keyword: Option<String>,
    pub employment_type: EmploymentType,
}

/// Token for one search generation.
///
/// `begin_search` hands one out; `install_results` only accepts the
/// ticket of the most recently started search, so a slow earlier fetch
/// can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// One call workflow in flight: which business, what to restore if the
/// call never resolves, and the watcher task.
struct ActiveCall {
    key: BusinessKey,
    prior_status: HiringStatus,
    handle: JoinHandle<PollResult>,
}

/// The page controller: owns all cross-component state.
pub struct Dashboard {
    user_location: Option<UserLocation>,
    params: SearchParams,
    employment_type: EmploymentType,
    filter_results: bool,
    businesses: Vec<Business>,
    selected: Option<BusinessKey>,
    loading: bool,
    search_generation: u64,
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
    active_calls: Vec<ActiveCall>,
}

impl Dashboard {
    #[must_use]
    pub fn new(filter_results: bool, default_radius_km: f64) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        Self {
            user_location: None,
            params: SearchParams {
                location: String::new(),
                radius_km: default_radius_km,
                keyword: None,
            },
            employment_type: EmploymentType::Any,
            filter_results,
            businesses: Vec::new(),
            selected: None,
            loading: false,
            search_generation: 0,
            cancel_tx,
            cancel_rx,
            active_calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.filter_results, config.default_radius_km)
    }

    // ---- preferences and location -------------------------------------

    /// Applies the preferences panel's criteria in one step.
    pub fn apply_preferences(&mut self, prefs: Preferences) {
        self.params.location = prefs.location;
        self.params.radius_km = prefs.radius_km;
        self.params.keyword = prefs.keyword.filter(|k| !k.trim().is_empty());
        self.employment_type = prefs.employment_type;
    }

    /// Sets only the coordinate half of the user location, keeping the
    /// address text (a "use current location" pick).
    pub fn set_user_coords(&mut self, coords: Coordinates) {
        let address = self
            .user_location
            .as_ref()
            .map_or_else(|| format!("{:.4}, {:.4}", coords.lat, coords.lng), |u| u.address.clone());
        self.user_location = Some(UserLocation { coords, address });
    }

    /// Sets only the address text, keeping any known coordinates.
    pub fn set_user_address(&mut self, address: &str) {
        self.params.location = address.to_owned();
        if let Some(user) = self.user_location.as_mut() {
            user.address = address.to_owned();
        }
    }

    /// Applies an autocomplete pick: always the address text, and the
    /// coordinates too when the suggestion carries them.
    pub fn choose_suggestion(&mut self, suggestion: &AddressSuggestion) {
        self.params.location = suggestion.place_name.clone();
        match (suggestion.coords, self.user_location.as_mut()) {
            (Some(coords), _) => {
                self.user_location = Some(UserLocation {
                    coords,
                    address: suggestion.place_name.clone(),
                });
            }
            (None, Some(user)) => user.address = suggestion.place_name.clone(),
            (None, None) => {}
        }
    }

    // ---- search --------------------------------------------------------

    /// Starts a new search generation and flags the dashboard loading.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.search_generation += 1;
        self.loading = true;
        SearchTicket {
            generation: self.search_generation,
        }
    }

    /// Installs the result of a finished fetch.
    ///
    /// Stale tickets (a newer search has started since) are discarded
    /// with a warn log and leave all state untouched, including the
    /// loading flag, which belongs to the newer search. Returns how
    /// many businesses were installed.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Search`] when the fetch failed; the
    /// business list is cleared so no partial results survive.
    pub fn install_results(
        &mut self,
        ticket: SearchTicket,
        fetched: Result<Vec<PlaceRecord>, PlacesError>,
    ) -> Result<usize, DashboardError> {
        if ticket.generation != self.search_generation {
            tracing::warn!(
                stale = ticket.generation,
                current = self.search_generation,
                "discarding stale search result"
            );
            return Ok(0);
        }
        self.loading = false;

        let records = match fetched {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "search failed; clearing business list");
                self.businesses.clear();
                self.selected = None;
                return Err(e.into());
            }
        };

        let keyword = self.params.keyword.clone();
        let mut businesses: Vec<Business> = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| normalize_place(record, idx, keyword.as_deref()))
            .collect();

        if self.filter_results {
            let center = self.user_location.as_ref().map(|u| u.coords);
            businesses = filter_businesses(businesses, center, self.params.radius_meters());
        }

        // Keys are only valid within one generation; a vanished selection
        // is dropped rather than pointed at a different business.
        if let Some(selected) = &self.selected {
            if !businesses.iter().any(|b| &b.key == selected) {
                self.selected = None;
            }
        }

        let count = businesses.len();
        self.businesses = businesses;
        tracing::info!(count, "installed search results");
        Ok(count)
    }

    /// Runs a full search round trip: one request, normalize, filter,
    /// replace.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Search`] when the fetch fails; the
    /// business list is cleared in that case.
    pub async fn run_search(&mut self, client: &PlacesClient) -> Result<usize, DashboardError> {
        let ticket = self.begin_search();
        let fetched = client.search(&self.params).await;
        self.install_results(ticket, fetched)
    }

    // ---- selection -----------------------------------------------------

    /// Selects a business row, returning the camera target for the map.
    ///
    /// Unknown keys leave the selection unchanged and return `None`.
    pub fn select(&mut self, key: &BusinessKey) -> Option<Coordinates> {
        let coords = self.businesses.iter().find(|b| &b.key == key)?.coords;
        self.selected = Some(key.clone());
        Some(coords)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ---- call workflow -------------------------------------------------

    /// Submits a call for a business and spawns a cancellable watcher
    /// for its status.
    ///
    /// The business shows `Calling` while the watcher runs. A rejected
    /// submission restores the previous status and surfaces the error.
    ///
    /// # Errors
    ///
    /// - [`DashboardError::UnknownBusiness`] if `key` is not in the
    ///   current result set.
    /// - [`DashboardError::NoPhone`] if the business cannot be called.
    /// - [`DashboardError::Call`] if the backend rejects the submission.
    pub async fn start_call(
        &mut self,
        client: &CallClient,
        key: &BusinessKey,
        poll: PollConfig,
    ) -> Result<(), DashboardError> {
        let business = self
            .businesses
            .iter_mut()
            .find(|b| &b.key == key)
            .ok_or_else(|| DashboardError::UnknownBusiness(key.clone()))?;
        if !business.has_usable_phone() {
            return Err(DashboardError::NoPhone(key.clone()));
        }

        let request = CallRequest {
            phone_number: business.phone.clone().unwrap_or_default(),
            business_name: business.name.clone(),
            role: business.job_role.clone(),
            employment_type: self.employment_type.to_string(),
            location: self.params.location.clone(),
        };
        let prior_status = business.status;
        business.status = HiringStatus::Calling;

        let initiated = match client.make_call(&request).await {
            Ok(initiated) => initiated,
            Err(e) => {
                // Restore: the lookup above proves the key exists.
                if let Some(b) = self.businesses.iter_mut().find(|b| &b.key == key) {
                    b.status = prior_status;
                }
                return Err(e.into());
            }
        };

        let watcher_client = client.clone();
        let cancel = self.cancel_rx.clone();
        let sid = initiated.call_sid;
        let handle =
            tokio::spawn(async move { poll_outcome(&watcher_client, &sid, poll, cancel).await });

        self.active_calls.push(ActiveCall {
            key: key.clone(),
            prior_status,
            handle,
        });
        Ok(())
    }

    /// Merges a completed call into exactly the matching business.
    ///
    /// A key that is no longer in the list (the result set was replaced
    /// mid-call) is a warn-log no-op; every other business is untouched.
    pub fn apply_outcome(&mut self, key: &BusinessKey, outcome: &CallOutcome) {
        match self.businesses.iter_mut().find(|b| &b.key == key) {
            Some(business) => {
                business.status = outcome.classification.display_status();
                business.last_contact = outcome.completed_at.clone();
            }
            None => {
                tracing::warn!(key = %key, call_sid = %outcome.call_sid, "call outcome for unknown business");
            }
        }
    }

    /// Awaits every outstanding watcher and folds its result into the
    /// business list.
    ///
    /// Exhausted and cancelled watchers revert their business from
    /// `Calling` back to the status it had before the call started.
    pub async fn finish_calls(&mut self) {
        let calls = std::mem::take(&mut self.active_calls);
        for call in calls {
            match call.handle.await {
                Ok(PollResult::Completed(outcome)) => self.apply_outcome(&call.key, &outcome),
                Ok(PollResult::Exhausted | PollResult::Cancelled) => {
                    self.revert_calling(&call.key, call.prior_status);
                }
                Err(e) => {
                    tracing::error!(key = %call.key, error = %e, "call watcher panicked");
                    self.revert_calling(&call.key, call.prior_status);
                }
            }
        }
    }

    /// Cancels all outstanding watchers and waits for them to stop.
    ///
    /// After this returns no poll task is alive; businesses stuck in
    /// `Calling` are reverted.
    pub async fn shutdown(&mut self) {
        let _ = self.cancel_tx.send(true);
        self.finish_calls().await;
    }

    fn revert_calling(&mut self, key: &BusinessKey, prior_status: HiringStatus) {
        if let Some(business) = self.businesses.iter_mut().find(|b| &b.key == key) {
            if business.status == HiringStatus::Calling {
                business.status = prior_status;
            }
        }
    }

    // ---- derived views -------------------------------------------------

    #[must_use]
    pub fn scene(&self) -> MapScene {
        let user_marker = self.user_location.as_ref().map(|u| u.coords);
        let radius_ring = user_marker.map_or_else(Vec::new, |center| {
            circle_polygon(center, self.params.radius_meters(), RADIUS_RING_STEPS)
        });
        let markers = self
            .businesses
            .iter()
            .map(|b| MarkerSpec {
                key: b.key.clone(),
                coords: b.coords,
                color: b.status.marker_color(),
                selected: self.selected.as_ref() == Some(&b.key),
            })
            .collect();
        let camera = self
            .selected
            .as_ref()
            .and_then(|key| self.businesses.iter().find(|b| &b.key == key))
            .map(|b| b.coords)
            .or(user_marker);

        MapScene {
            user_marker,
            radius_ring,
            markers,
            camera,
        }
    }

    #[must_use]
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.businesses
            .iter()
            .map(|b| TableRow {
                key: b.key.clone(),
                name: b.name.clone(),
                job_role: b.job_role.clone(),
                status: b.status.to_string(),
                last_contact: b.last_contact.clone(),
                selected: self.selected.as_ref() == Some(&b.key),
            })
            .collect()
    }

    // ---- accessors -----------------------------------------------------

    #[must_use]
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    #[must_use]
    pub fn employment_type(&self) -> EmploymentType {
        self.employment_type
    }

    #[must_use]
    pub fn user_location(&self) -> Option<&UserLocation> {
        self.user_location.as_ref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&BusinessKey> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of call watchers still in flight.
    #[must_use]
    pub fn active_call_count(&self) -> usize {
        self.active_calls.len()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

//! The dashboard controller: all cross-component state in one place.
//!
//! Owns the user location, search parameters, fetched business list,
//! row selection, and every in-flight call watcher. The map scene and
//! table rows are derived views over the same list, so a state change
//! re-renders both consistently — the controller equivalent of the
//! original page component.

pub mod error;
pub mod state;
pub mod view;

pub use error::DashboardError;
pub use state::{Dashboard, Preferences, SearchTicket};
pub use view::{MapScene, MarkerSpec, TableRow};

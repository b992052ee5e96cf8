//! Client and status watcher for the call-automation backend.
//!
//! A call is a two-step protocol: submit the request (`POST /make-call`)
//! and, once the backend accepts it with a call identifier, poll
//! `GET /call-status/{sid}` until the call reaches a terminal status or
//! the attempt budget runs out. The [`watcher`] module owns the polling
//! loop; it is cancellable so the dashboard can tear it down with the
//! rest of its state.

pub mod client;
pub mod error;
pub mod types;
pub mod watcher;

pub use client::CallClient;
pub use error::CallError;
pub use types::{CallInitiated, CallOutcome, CallRequest, CallStatusReport};
pub use watcher::{poll_outcome, PollConfig, PollResult};

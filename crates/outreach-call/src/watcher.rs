//! Cancellable polling loop for call status.
//!
//! One watcher per submitted call: poll at a fixed interval up to a
//! bounded attempt count, stop on the first terminal status that
//! carries a classification. The cancellation flag ties the watcher to
//! its owner's lifetime so no poll timer survives a dashboard teardown.

use std::time::Duration;

use tokio::sync::watch;

use outreach_core::HiringClassification;

use crate::client::CallClient;
use crate::types::{format_completion_date, CallOutcome};

/// Poll cadence and budget for one call watcher.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollConfig {
    #[must_use]
    pub fn new(interval_ms: u64, max_attempts: u32) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            max_attempts,
        }
    }
}

/// How a watcher ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResult {
    /// The call finished and carried a classification.
    Completed(CallOutcome),
    /// The attempt budget ran out without a terminal status; no further
    /// status requests are issued.
    Exhausted,
    /// The owner cancelled the watcher (or went away) mid-poll.
    Cancelled,
}

/// Polls the status endpoint until the call completes, the budget runs
/// out, or `cancel` flips to `true`.
///
/// Transient per-poll errors are logged and consume an attempt; they do
/// not abort the loop. A terminal report without a classification also
/// consumes an attempt, since the backend may still be analysing the
/// recording. A dropped cancel sender counts as cancellation — the
/// owning dashboard is gone.
pub async fn poll_outcome(
    client: &CallClient,
    call_sid: &str,
    config: PollConfig,
    mut cancel: watch::Receiver<bool>,
) -> PollResult {
    if *cancel.borrow() {
        return PollResult::Cancelled;
    }

    for attempt in 1..=config.max_attempts {
        tokio::select! {
            () = tokio::time::sleep(config.interval) => {}
            changed = cancel.changed() => {
                if changed.is_err() || *cancel.borrow() {
                    tracing::info!(call_sid, attempt, "call watcher cancelled");
                    return PollResult::Cancelled;
                }
            }
        }

        match client.call_status(call_sid).await {
            Ok(report) if report.is_terminal() => {
                if let Some(raw) = report.hiring_status.as_deref() {
                    let outcome = CallOutcome {
                        call_sid: call_sid.to_owned(),
                        classification: HiringClassification::parse(raw),
                        completed_at: format_completion_date(report.completed_at.as_deref()),
                    };
                    tracing::info!(
                        call_sid,
                        attempt,
                        classification = ?outcome.classification,
                        "call completed"
                    );
                    return PollResult::Completed(outcome);
                }
                tracing::warn!(call_sid, attempt, "terminal status without classification");
            }
            Ok(report) => {
                tracing::debug!(call_sid, attempt, status = %report.status, "call still in flight");
            }
            Err(e) => {
                tracing::warn!(call_sid, attempt, error = %e, "status poll failed");
            }
        }
    }

    tracing::warn!(
        call_sid,
        max_attempts = config.max_attempts,
        "poll budget exhausted without terminal status"
    );
    PollResult::Exhausted
}

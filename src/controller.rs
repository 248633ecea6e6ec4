//! Attendance dataset controller.
//!
//! One controller instance backs one filter-driven view (dashboard,
//! history report or teacher journal). It owns the loaded row set, fetches
//! on filter changes, applies optimistic manual edits and reconciles them
//! against server truth, and derives the aggregates the views render.
//!
//! Concurrency model: callers may run overlapping `refresh` futures. Each
//! refresh stamps a generation when it starts; a completion is applied
//! only if its generation is still the latest, so the displayed data
//! always follows the most recently *initiated* request regardless of
//! completion order. Superseded responses are dropped, never applied.
//! There is no cancellation; in-flight requests simply finish into the
//! staleness check. Fetch failures keep the previously loaded rows so the
//! view can show stale-but-valid data next to an error banner.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, warn};

use crate::api::{AttendanceApi, ManualStatusUpdate};
use crate::errors::{AppError, AppResult};
use crate::filter::FilterCriteria;
use crate::models::{AttendanceRecord, AttendanceStatus};

/// Where a view is in its load cycle. `Idle` means "not yet searched",
/// distinct from `Ready` with zero rows ("searched, nothing found").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    /// The last fetch failed; rows from the previous `Ready` state are
    /// retained and still rendered.
    Error(String),
}

/// Aggregates derived from the current row set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total: usize,
    pub present: usize,
    /// First `limit` rows in server order; the client never re-sorts.
    pub recent: Vec<AttendanceRecord>,
}

#[derive(Debug)]
struct ViewState {
    phase: LoadPhase,
    records: Vec<AttendanceRecord>,
    last_complete: Option<FilterCriteria>,
    generation: u64,
}

pub struct AttendanceController<A: AttendanceApi> {
    api: A,
    state: Mutex<ViewState>,
}

impl<A: AttendanceApi> AttendanceController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState {
                phase: LoadPhase::Idle,
                records: Vec::new(),
                last_complete: None,
                generation: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        // Poisoning only happens if a panic hit while the lock was held;
        // the state itself stays structurally valid.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Re-queries the backend for `criteria`.
    ///
    /// Incomplete criteria are a no-op: a partial query is never issued.
    /// A completion that has been superseded by a newer refresh is
    /// discarded. Failures surface as `Err` and leave the previous rows
    /// untouched with the phase set to `Error`.
    pub async fn refresh(&self, criteria: &FilterCriteria) -> AppResult<()> {
        let Some(payload) = criteria.to_payload() else {
            debug!("refresh skipped: incomplete filter criteria");
            return Ok(());
        };

        let generation = {
            let mut state = self.state();
            state.generation += 1;
            state.phase = LoadPhase::Loading;
            state.generation
        };

        let result = self.api.fetch(&payload).await;

        let mut state = self.state();
        if state.generation != generation {
            warn!(
                "discarding stale fetch result (generation {generation}, current {})",
                state.generation
            );
            return Ok(());
        }

        match result {
            Ok(records) => {
                debug!("fetch applied: {} rows", records.len());
                state.records = records;
                state.phase = LoadPhase::Ready;
                state.last_complete = Some(criteria.clone());
                Ok(())
            }
            Err(err) => {
                error!("fetch failed: {err}");
                state.phase = LoadPhase::Error(err.user_message());
                Err(err)
            }
        }
    }

    /// Manual override from the teacher journal.
    ///
    /// The local row is patched first (optimistic) so the view reflects
    /// the edit immediately, then the update goes to the server. If the
    /// server rejects it, the controller re-fetches with the
    /// last-known-complete criteria to restore ground truth and hands the
    /// failure back to the caller. No prior value is stored; the re-fetch
    /// is the rollback. Concurrent edits to the same record are not
    /// serialized: the last server write wins.
    pub async fn set_status(
        &self,
        record_id: i64,
        new_status: AttendanceStatus,
    ) -> AppResult<()> {
        let update = {
            let mut state = self.state();
            let criteria = state.last_complete.clone();
            let Some(record) = state.records.iter_mut().find(|r| r.id == record_id) else {
                return Err(AppError::Validation(format!(
                    "No loaded record with id {record_id}"
                )));
            };

            let (subject_label, date) = resolve_journal_keys(record, criteria.as_ref())?;
            record.apply_manual_status(new_status);

            ManualStatusUpdate {
                student_id: record.student_id,
                status: new_status,
                subject_label,
                date,
            }
        };

        match self.api.submit_manual_status(&update).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("manual status update failed, re-syncing: {err}");
                let criteria = self.state().last_complete.clone();
                if let Some(criteria) = criteria {
                    // authoritative reconcile; its own failure already set
                    // the Error phase and must not mask the edit failure
                    let _ = self.refresh(&criteria).await;
                }
                Err(err)
            }
        }
    }

    /// Derived aggregates for the dashboard cards: row total, Present
    /// count, and the first `limit` rows in server order.
    pub fn summary(&self, limit: usize) -> DashboardSummary {
        let state = self.state();
        DashboardSummary {
            total: state.records.len(),
            present: state
                .records
                .iter()
                .filter(|r| r.status.is_present())
                .count(),
            recent: state.records.iter().take(limit).cloned().collect(),
        }
    }

    /// Copy of the currently loaded rows, e.g. for the export serializer.
    pub fn snapshot(&self) -> Vec<AttendanceRecord> {
        self.state().records.clone()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state().phase.clone()
    }

    /// The criteria of the last successful fetch, used for re-sync and
    /// for export filenames.
    pub fn last_criteria(&self) -> Option<FilterCriteria> {
        self.state().last_complete.clone()
    }
}

/// A manual update needs the subject and date it applies to. The journal
/// criteria carries both; history rows carry their own. Without either
/// the edit is rejected before any network call.
fn resolve_journal_keys(
    record: &AttendanceRecord,
    criteria: Option<&FilterCriteria>,
) -> AppResult<(String, String)> {
    if let Some(FilterCriteria::ClassSubject {
        subject_label,
        date: Some(date),
        ..
    }) = criteria
    {
        return Ok((subject_label.clone(), date.format("%Y-%m-%d").to_string()));
    }
    match record.date {
        Some(date) => Ok((
            record.subject_label.clone(),
            date.format("%Y-%m-%d").to_string(),
        )),
        None => Err(AppError::Validation(
            "Cannot resolve the date for this manual update".to_string(),
        )),
    }
}

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, OwnedMutexGuard};
use utoipa::ToSchema;

/// Single-flight guard for synchronization passes.
///
/// Both the cron scheduler and the maintenance endpoint go through this
/// guard, so at most one pass runs at a time; a caller that loses the race
/// skips the pass instead of queueing behind it.
#[derive(Clone, Default)]
pub struct SyncGuard(Arc<Mutex<()>>);

impl SyncGuard {
    /// Returns a permit if no pass is currently running, `None` otherwise.
    pub fn try_acquire(&self) -> Option<OwnedMutexGuard<()>> {
        self.0.clone().try_lock_owned().ok()
    }
}

/// Summary of one synchronization pass, logged by the scheduler and
/// returned by the maintenance trigger endpoint.
#[derive(Debug, Default, Clone, Serialize, ToSchema)]
pub struct SyncReport {
    /// Contest status transitions applied this pass.
    pub transitions: usize,
    /// Contests settled (scored and ranked) after reaching completed.
    pub settled_contests: usize,
    /// Contest ids whose settlement failed; retried next pass or via the
    /// maintenance settle endpoint.
    pub settlement_failures: Vec<i32>,
    /// New fixture matches that received their default contests.
    pub seeded_matches: usize,
    /// Unfinished contests whose match was absent from the feed listing.
    pub unmatched_contests: usize,
}

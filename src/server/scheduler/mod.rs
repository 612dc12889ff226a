//! Cron scheduler for recurring jobs.
//!
//! The only recurring job is the synchronization pass; it shares the
//! single-flight guard with the maintenance trigger endpoint so the two can
//! never run a pass concurrently.

pub mod config;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::Error,
    feed::FeedClient,
    model::sync::SyncGuard,
    service::sync::SyncService,
};

pub struct Scheduler {
    db: DatabaseConnection,
    feed: FeedClient,
    sync_guard: SyncGuard,
    scheduler: JobScheduler,
}

impl Scheduler {
    pub async fn new(
        db: DatabaseConnection,
        feed: FeedClient,
        sync_guard: SyncGuard,
    ) -> Result<Self, Error> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            db,
            feed,
            sync_guard,
            scheduler,
        })
    }

    pub async fn start(self) -> Result<(), Error> {
        let db = self.db.clone();
        let feed = self.feed.clone();
        let sync_guard = self.sync_guard.clone();

        let job = Job::new_async(config::sync::CRON_EXPRESSION, move |_uuid, _lock| {
            let db = db.clone();
            let feed = feed.clone();
            let sync_guard = sync_guard.clone();

            Box::pin(async move {
                let service = SyncService::new(&db, &feed);
                match service.run_guarded(&sync_guard).await {
                    Ok(report) => tracing::info!(
                        "Sync pass complete: {} transition(s), {} contest(s) settled, {} fixture(s) seeded",
                        report.transitions,
                        report.settled_contests,
                        report.seeded_matches
                    ),
                    Err(Error::SyncInProgress) => {
                        tracing::warn!("Skipped sync pass: previous pass still running")
                    }
                    Err(err) => tracing::error!("Sync pass failed: {}", err),
                }
            })
        })?;

        self.scheduler.add(job).await?;
        self.scheduler.start().await?;

        tracing::info!("Scheduler started");

        Ok(())
    }
}

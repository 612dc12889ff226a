//! Match-status synchronization.
//!
//! A pass polls the feed's score listing once, advances contest statuses
//! along the forward-only path upcoming -> live -> completed, settles
//! contests that just completed, and seeds default contests for newly
//! announced fixtures. The feed is the sole authority on phases; local state
//! never moves without a feed observation.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use entity::contest::ContestStatus;

use crate::{
    model::contest::CreateContestDto,
    server::{
        data::contest::ContestRepository,
        error::Error,
        feed::{
            model::{FeedMatch, MatchPhase},
            FeedClient,
        },
        model::sync::{SyncGuard, SyncReport},
        service::scoring::ScoringService,
    },
};

/// Upper bound on fixtures that receive default contests in one pass, so a
/// feed dump of a whole season cannot flood a single pass.
pub const MAX_SEEDED_MATCHES_PER_PASS: usize = 5;

/// Default contests created for every newly announced fixture.
static DEFAULT_CONTESTS: &[(&str, &str, i32)] = &[
    ("Mega Contest", "Open contest for everyone", 100),
    ("Head to Head", "Two entries, winner takes all", 2),
];

/// The forward-only status transition for one contest given the feed phase
/// of its match. `None` means hold: the phase carries no new information or
/// would move the contest backwards.
pub fn next_status(local: ContestStatus, phase: MatchPhase) -> Option<ContestStatus> {
    match (local, phase) {
        (ContestStatus::Upcoming, MatchPhase::Live) => Some(ContestStatus::Live),
        (ContestStatus::Upcoming, MatchPhase::Result) => Some(ContestStatus::Completed),
        (ContestStatus::Live, MatchPhase::Result) => Some(ContestStatus::Completed),
        _ => None,
    }
}

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    feed: &'a FeedClient,
}

impl<'a> SyncService<'a> {
    pub fn new(db: &'a DatabaseConnection, feed: &'a FeedClient) -> Self {
        Self { db, feed }
    }

    /// Runs a pass if none is in flight, otherwise fails fast with
    /// [`Error::SyncInProgress`].
    pub async fn run_guarded(&self, guard: &SyncGuard) -> Result<SyncReport, Error> {
        let _permit = guard.try_acquire().ok_or(Error::SyncInProgress)?;

        self.run_pass().await
    }

    /// Runs one full synchronization pass. A failed or timed-out feed
    /// listing degrades the pass to a no-op with every contest untouched;
    /// settlement failures are recorded in the report and retried on a
    /// later pass.
    pub async fn run_pass(&self) -> Result<SyncReport, Error> {
        let matches = match self.feed.matches().await {
            Ok(matches) => matches,
            Err(err) => {
                tracing::warn!("Feed listing unavailable, skipping pass: {}", err);
                return Ok(SyncReport::default());
            }
        };
        let phases: HashMap<&str, MatchPhase> = matches
            .iter()
            .map(|feed_match| (feed_match.id.as_str(), feed_match.ms))
            .collect();

        let mut report = SyncReport::default();
        self.advance_contests(&phases, &mut report).await?;
        self.seed_new_fixtures(&matches, &mut report).await?;

        Ok(report)
    }

    async fn advance_contests(
        &self,
        phases: &HashMap<&str, MatchPhase>,
        report: &mut SyncReport,
    ) -> Result<(), Error> {
        let contests = ContestRepository::new(self.db);

        for contest in contests.get_unfinished().await? {
            let Some(phase) = phases.get(contest.match_id.as_str()) else {
                // Absent from the listing is not a result; hold and log.
                tracing::warn!(
                    "Contest {} references match {} unknown to the feed",
                    contest.id,
                    contest.match_id
                );
                report.unmatched_contests += 1;
                continue;
            };

            let Some(to) = next_status(contest.status, *phase) else {
                continue;
            };

            if !contests.advance_status(contest.id, contest.status, to).await? {
                // Another pass moved it first.
                continue;
            }
            report.transitions += 1;
            tracing::info!(
                "Contest {} moved to {:?} (match {})",
                contest.id,
                to,
                contest.match_id
            );

            if to == ContestStatus::Completed {
                match ScoringService::new(self.db).settle_contest(contest.id).await {
                    Ok(_) => report.settled_contests += 1,
                    Err(err) => {
                        tracing::error!("Settling contest {} failed: {}", contest.id, err);
                        report.settlement_failures.push(contest.id);
                    }
                }
            }
        }

        Ok(())
    }

    async fn seed_new_fixtures(
        &self,
        matches: &[FeedMatch],
        report: &mut SyncReport,
    ) -> Result<(), Error> {
        let contests = ContestRepository::new(self.db);

        for feed_match in matches {
            if report.seeded_matches >= MAX_SEEDED_MATCHES_PER_PASS {
                break;
            }
            if feed_match.ms != MatchPhase::Fixture {
                continue;
            }
            if contests.exists_for_match(&feed_match.id).await? {
                continue;
            }

            for (name, description, max_entries) in DEFAULT_CONTESTS {
                contests
                    .create(&CreateContestDto {
                        match_id: feed_match.id.clone(),
                        name: (*name).to_string(),
                        description: Some((*description).to_string()),
                        max_entries: *max_entries,
                    })
                    .await?;
            }
            report.seeded_matches += 1;
            tracing::info!(
                "Seeded default contests for fixture {} ({} vs {})",
                feed_match.id,
                feed_match.t1,
                feed_match.t2
            );
        }

        Ok(())
    }
}

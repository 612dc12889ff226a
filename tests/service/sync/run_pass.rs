//! Tests for SyncService::run_pass and run_guarded.
//!
//! These tests verify the full synchronization pass against a mock feed:
//! forward-only status transitions, settlement on completion, default
//! contest seeding for new fixtures, the per-pass seeding cap, and the
//! single-flight guard.

use crease::server::{
    error::Error,
    feed::FeedClient,
    model::sync::SyncGuard,
    service::sync::{SyncService, MAX_SEEDED_MATCHES_PER_PASS},
};
use crease_test_utils::prelude::*;
use entity::contest::ContestStatus;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests that a live feed phase moves an upcoming contest to live.
///
/// Expected: Ok with one transition and the contest stored as live
#[tokio::test]
async fn advances_upcoming_contest_when_match_goes_live() -> Result<(), TestError> {
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint(vec![factory::feed_match("match-1", "live")], 1)
        .build()
        .await?;
    let contest = setup
        .contests()
        .insert("match-1", ContestStatus::Upcoming, 10)
        .await?;

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let report = SyncService::new(&setup.db, &feed).run_pass().await.unwrap();

    assert_eq!(report.transitions, 1);
    assert_eq!(report.settled_contests, 0);
    let stored = entity::prelude::Contest::find_by_id(contest.id)
        .one(&setup.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ContestStatus::Live);
    setup.assert_mocks();

    Ok(())
}

/// Tests that a result phase completes a live contest and settles it.
///
/// Verifies the entries end up scored from the stored stat lines and ranked
/// deterministically once the contest reaches completed.
///
/// Expected: Ok with the contest completed, entries scored and ranked
#[tokio::test]
async fn settles_contest_when_match_reaches_result() -> Result<(), TestError> {
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint(vec![factory::feed_match("match-1", "result")], 1)
        .build()
        .await?;
    let contest = setup
        .contests()
        .insert("match-1", ContestStatus::Live, 10)
        .await?;
    let team_a = setup.teams().insert(1, "match-1").await?;
    let ids = factory::default_player_ids();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    let team_b = setup.teams().insert_with(2, "match-1", "p3", "p4", &ids).await?;
    setup.entries().insert(contest.id, 1, team_a.id).await?;
    setup.entries().insert(contest.id, 2, team_b.id).await?;
    // p3 scores 50 runs: 50 base for user 1, 100 as user 2's captain
    setup.stats().insert("match-1", "p3", 50, 0, 0, 0, 0).await?;

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let report = SyncService::new(&setup.db, &feed).run_pass().await.unwrap();

    assert_eq!(report.transitions, 1);
    assert_eq!(report.settled_contests, 1);
    assert!(report.settlement_failures.is_empty());

    let stored = entity::prelude::Contest::find_by_id(contest.id)
        .one(&setup.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ContestStatus::Completed);

    let entries = entity::prelude::ContestEntry::find()
        .filter(entity::contest_entry::Column::ContestId.eq(contest.id))
        .all(&setup.db)
        .await?;
    let winner = entries.iter().find(|entry| entry.user_id == 2).unwrap();
    assert_eq!(winner.points, Decimal::from(100));
    assert_eq!(winner.rank_position, Some(1));
    let runner_up = entries.iter().find(|entry| entry.user_id == 1).unwrap();
    assert_eq!(runner_up.points, Decimal::from(50));
    assert_eq!(runner_up.rank_position, Some(2));

    Ok(())
}

/// Tests that a fixture phase and an unknown phase both hold a live contest.
///
/// Expected: Ok with zero transitions and the status unchanged
#[tokio::test]
async fn holds_contest_on_non_advancing_phases() -> Result<(), TestError> {
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint(
            vec![
                factory::feed_match("match-1", "fixture"),
                factory::feed_match("match-2", "abandoned"),
            ],
            1,
        )
        .build()
        .await?;
    let held = setup
        .contests()
        .insert("match-1", ContestStatus::Live, 10)
        .await?;
    setup
        .contests()
        .insert("match-2", ContestStatus::Live, 10)
        .await?;

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let report = SyncService::new(&setup.db, &feed).run_pass().await.unwrap();

    assert_eq!(report.transitions, 0);
    let stored = entity::prelude::Contest::find_by_id(held.id)
        .one(&setup.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ContestStatus::Live);

    Ok(())
}

/// Tests that a contest whose match is absent from the feed listing is
/// counted but never moved.
///
/// Expected: Ok with one unmatched contest and the status unchanged
#[tokio::test]
async fn counts_contest_missing_from_feed() -> Result<(), TestError> {
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint(vec![], 1)
        .build()
        .await?;
    let contest = setup
        .contests()
        .insert("match-gone", ContestStatus::Upcoming, 10)
        .await?;

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let report = SyncService::new(&setup.db, &feed).run_pass().await.unwrap();

    assert_eq!(report.unmatched_contests, 1);
    assert_eq!(report.transitions, 0);
    let stored = entity::prelude::Contest::find_by_id(contest.id)
        .one(&setup.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ContestStatus::Upcoming);

    Ok(())
}

/// Tests that a failed feed listing degrades the pass to a no-op instead of
/// failing it.
///
/// Expected: Ok with an empty report and every contest untouched
#[tokio::test]
async fn degrades_to_empty_report_when_feed_listing_fails() -> Result<(), TestError> {
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint_error(503, 1)
        .build()
        .await?;
    let contest = setup
        .contests()
        .insert("match-1", ContestStatus::Upcoming, 10)
        .await?;

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let report = SyncService::new(&setup.db, &feed).run_pass().await.unwrap();

    assert_eq!(report.transitions, 0);
    assert_eq!(report.settled_contests, 0);
    assert_eq!(report.seeded_matches, 0);
    assert_eq!(report.unmatched_contests, 0);
    assert!(report.settlement_failures.is_empty());
    let stored = entity::prelude::Contest::find_by_id(contest.id)
        .one(&setup.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ContestStatus::Upcoming);
    setup.assert_mocks();

    Ok(())
}

/// Tests that a newly announced fixture gets the default contest pair and
/// that a second pass does not seed it again.
///
/// Expected: Ok with one seeded match, two contests, then zero on repeat
#[tokio::test]
async fn seeds_default_contests_once_per_fixture() -> Result<(), TestError> {
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint(vec![factory::feed_match("match-new", "fixture")], 2)
        .build()
        .await?;

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let service = SyncService::new(&setup.db, &feed);

    let first = service.run_pass().await.unwrap();
    assert_eq!(first.seeded_matches, 1);

    let contests = entity::prelude::Contest::find()
        .filter(entity::contest::Column::MatchId.eq("match-new"))
        .all(&setup.db)
        .await?;
    assert_eq!(contests.len(), 2);
    assert!(contests.iter().all(|c| c.status == ContestStatus::Upcoming));

    let second = service.run_pass().await.unwrap();
    assert_eq!(second.seeded_matches, 0);
    let contests = entity::prelude::Contest::find()
        .filter(entity::contest::Column::MatchId.eq("match-new"))
        .all(&setup.db)
        .await?;
    assert_eq!(contests.len(), 2);
    setup.assert_mocks();

    Ok(())
}

/// Tests that seeding stops at the per-pass cap when the feed announces a
/// large batch of fixtures at once.
///
/// Expected: Ok with exactly MAX_SEEDED_MATCHES_PER_PASS seeded matches
#[tokio::test]
async fn caps_seeded_fixtures_per_pass() -> Result<(), TestError> {
    let fixtures: Vec<serde_json::Value> = (1..=MAX_SEEDED_MATCHES_PER_PASS + 3)
        .map(|n| factory::feed_match(&format!("match-{n}"), "fixture"))
        .collect();
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint(fixtures, 1)
        .build()
        .await?;

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let report = SyncService::new(&setup.db, &feed).run_pass().await.unwrap();

    assert_eq!(report.seeded_matches, MAX_SEEDED_MATCHES_PER_PASS);

    Ok(())
}

/// Tests that run_guarded fails fast while another pass holds the permit.
///
/// Expected: Err(SyncInProgress) without touching the feed
#[tokio::test]
async fn rejects_overlapping_pass() -> Result<(), TestError> {
    let setup = TestBuilder::new().with_contest_tables().build().await?;
    let guard = SyncGuard::default();
    let permit = guard.try_acquire();
    assert!(permit.is_some());

    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
    let result = SyncService::new(&setup.db, &feed).run_guarded(&guard).await;

    assert!(matches!(result, Err(Error::SyncInProgress)));

    Ok(())
}

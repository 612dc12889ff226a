//! Tests for the maintenance endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crease::{
    model::stat::{PlayerStatBatchDto, PlayerStatDto},
    server::{controller::sync::{ingest_stats, run_sync_pass}, model::auth::MaintenanceAuth},
};
use crease_test_utils::prelude::*;
use entity::contest::ContestStatus;
use sea_orm::EntityTrait;

use crate::test_app_state;

/// Tests triggering a synchronization pass through the endpoint.
///
/// Expected: Ok with 200 OK and a pass report
#[tokio::test]
async fn runs_sync_pass_on_demand() -> Result<(), TestError> {
    let setup = TestBuilder::new()
        .with_contest_tables()
        .with_matches_endpoint(vec![factory::feed_match("match-1", "live")], 1)
        .build()
        .await?;
    setup
        .contests()
        .insert("match-1", ContestStatus::Upcoming, 10)
        .await?;
    let state = test_app_state(&setup);

    let result = run_sync_pass(State(state), MaintenanceAuth).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);
    setup.assert_mocks();

    Ok(())
}

/// Tests ingesting a stat batch through the endpoint.
///
/// Expected: Ok with 200 OK and the stat line persisted with cached points
#[tokio::test]
async fn ingests_stat_batch() -> Result<(), TestError> {
    let setup = TestBuilder::new().with_contest_tables().build().await?;
    let state = test_app_state(&setup);

    let batch = PlayerStatBatchDto {
        stats: vec![PlayerStatDto {
            match_id: "match-1".to_string(),
            player_id: "p1".to_string(),
            player_name: "Player p1".to_string(),
            runs: 40,
            wickets: 2,
            catches: 1,
            stumpings: 0,
            run_outs: 0,
        }],
    };

    let result = ingest_stats(State(state), MaintenanceAuth, Json(batch)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = entity::prelude::PlayerMatchStat::find()
        .one(&setup.db)
        .await?
        .unwrap();
    assert_eq!(stored.runs, 40);
    // 40 runs + 2*25 wickets + 1*8 catches
    assert_eq!(stored.total_points, rust_decimal::Decimal::from(98));

    Ok(())
}

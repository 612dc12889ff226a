//! Tests for the contest endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crease::{
    model::contest::JoinContestDto,
    server::controller::contest::{get_leaderboard, join_contest},
};
use crease_test_utils::prelude::*;
use entity::contest::ContestStatus;

use crate::{controller::test_user, test_app_state};

/// Tests joining an open contest through the endpoint.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn joins_open_contest() -> Result<(), TestError> {
    let setup = TestBuilder::new().with_contest_tables().build().await?;
    let contest = setup
        .contests()
        .insert("match-1", ContestStatus::Upcoming, 10)
        .await?;
    let team = setup.teams().insert(1, "match-1").await?;
    let state = test_app_state(&setup);

    let result = join_contest(
        State(state),
        test_user(1),
        Path(contest.id),
        Json(JoinContestDto { team_id: team.id }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests that a duplicate join surfaces as a conflict.
///
/// Expected: Err mapping to 409 Conflict
#[tokio::test]
async fn rejects_duplicate_join_with_conflict() -> Result<(), TestError> {
    let setup = TestBuilder::new().with_contest_tables().build().await?;
    let contest = setup
        .contests()
        .insert("match-1", ContestStatus::Upcoming, 10)
        .await?;
    let team = setup.teams().insert(1, "match-1").await?;
    let state = test_app_state(&setup);

    join_contest(
        State(state.clone()),
        test_user(1),
        Path(contest.id),
        Json(JoinContestDto { team_id: team.id }),
    )
    .await
    .unwrap();

    let result = join_contest(
        State(state),
        test_user(1),
        Path(contest.id),
        Json(JoinContestDto { team_id: team.id }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests that the leaderboard of a missing contest returns not found.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn leaderboard_of_missing_contest_is_not_found() -> Result<(), TestError> {
    let setup = TestBuilder::new().with_contest_tables().build().await?;
    let state = test_app_state(&setup);

    let result = get_leaderboard(State(state), Path(999)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

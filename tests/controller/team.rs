//! Tests for the team endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crease::{
    model::team::{CreateTeamDto, TeamPlayerDto},
    server::controller::team::create_team,
};
use crease_test_utils::prelude::*;

use crate::{controller::test_user, test_app_state};

fn valid_draft() -> CreateTeamDto {
    let players = factory::default_player_ids()
        .into_iter()
        .map(|id| TeamPlayerDto {
            player_name: format!("Player {id}"),
            player_id: id,
            player_role: None,
            squad_name: None,
        })
        .collect();

    CreateTeamDto {
        match_id: "match-1".to_string(),
        name: "My XI".to_string(),
        captain_id: "p1".to_string(),
        vice_captain_id: "p2".to_string(),
        players,
    }
}

/// Tests team creation through the endpoint with a valid draft.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn creates_team_with_valid_draft() -> Result<(), TestError> {
    let setup = TestBuilder::new().with_contest_tables().build().await?;
    let state = test_app_state(&setup);

    let result = create_team(State(state), test_user(1), Json(valid_draft())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests that a draft with a duplicate player is rejected.
///
/// Expected: Err mapping to 400 Bad Request
#[tokio::test]
async fn rejects_draft_with_duplicate_player() -> Result<(), TestError> {
    let setup = TestBuilder::new().with_contest_tables().build().await?;
    let state = test_app_state(&setup);
    let mut draft = valid_draft();
    draft.players[10].player_id = "p1".to_string();

    let result = create_team(State(state), test_user(1), Json(draft)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

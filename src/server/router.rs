use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Crease",
            description = "Fantasy cricket contest engine: team building, contest membership, scoring, and leaderboards."
        ),
        tags(
            (name = controller::team::TEAM_TAG, description = "Fantasy team endpoints"),
            (name = controller::contest::CONTEST_TAG, description = "Contest and leaderboard endpoints"),
            (name = controller::matches::MATCH_TAG, description = "Match feed passthrough endpoints"),
            (name = controller::sync::SYNC_TAG, description = "Maintenance endpoints")
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::team::create_team,
            controller::team::my_teams
        ))
        .routes(routes!(
            controller::team::get_team,
            controller::team::delete_team
        ))
        .routes(routes!(
            controller::contest::list_contests,
            controller::contest::create_contest
        ))
        .routes(routes!(controller::contest::get_contest))
        .routes(routes!(controller::contest::join_contest))
        .routes(routes!(controller::contest::has_joined))
        .routes(routes!(controller::contest::get_leaderboard))
        .routes(routes!(controller::matches::list_matches))
        .routes(routes!(controller::matches::get_match_squad))
        .routes(routes!(controller::sync::run_sync_pass))
        .routes(routes!(controller::sync::settle_contest))
        .routes(routes!(controller::sync::ingest_stats))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

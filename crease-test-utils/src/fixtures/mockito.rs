//! Mockito endpoint helpers for the match data feed.

use mockito::{Matcher, Mock, ServerGuard};

use crate::constant::TEST_FEED_API_KEY;

/// Mock `GET /cricScore` returning a successful envelope with `data`.
pub async fn mock_matches_endpoint(
    server: &mut ServerGuard,
    data: serde_json::Value,
    expected_requests: usize,
) -> Mock {
    let body = serde_json::json!({
        "status": "success",
        "data": data,
    });

    server
        .mock("GET", "/cricScore")
        .match_query(Matcher::UrlEncoded(
            "apikey".into(),
            TEST_FEED_API_KEY.into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Mock `GET /cricScore` failing with the given HTTP status.
pub async fn mock_matches_endpoint_error(
    server: &mut ServerGuard,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/cricScore")
        .match_query(Matcher::UrlEncoded(
            "apikey".into(),
            TEST_FEED_API_KEY.into(),
        ))
        .with_status(status)
        .expect(expected_requests)
        .create_async()
        .await
}

/// Mock `GET /match_squad` for one match id.
pub async fn mock_squad_endpoint(
    server: &mut ServerGuard,
    match_id: &str,
    data: serde_json::Value,
    expected_requests: usize,
) -> Mock {
    let body = serde_json::json!({
        "status": "success",
        "data": data,
    });

    server
        .mock("GET", "/match_squad")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), TEST_FEED_API_KEY.into()),
            Matcher::UrlEncoded("id".into(), match_id.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

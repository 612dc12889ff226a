use crease::server::{
    feed::FeedClient,
    model::{app::AppState, sync::SyncGuard},
};
use crease_test_utils::prelude::*;

pub static TEST_MAINTENANCE_SECRET: &str = "test_maintenance_secret";

/// Application state wired to the test database and mock feed server.
pub fn test_app_state(setup: &TestSetup) -> AppState {
    let feed = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY)
        .expect("Failed to build feed client");

    AppState {
        db: setup.db.clone(),
        feed,
        sync_guard: SyncGuard::default(),
        maintenance_secret: TEST_MAINTENANCE_SECRET.to_string(),
    }
}

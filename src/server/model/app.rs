use sea_orm::DatabaseConnection;

use crate::server::{feed::FeedClient, model::sync::SyncGuard};

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub feed: FeedClient,
    pub sync_guard: SyncGuard,
    pub maintenance_secret: String,
}

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::Error, feed::FeedClient};

pub fn build_feed_client(config: &Config) -> Result<FeedClient, Error> {
    Ok(FeedClient::new(
        &config.feed_base_url,
        &config.feed_api_key,
    )?)
}

/// Connects to the database and brings the schema up to date.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrated");

    Ok(db)
}

use tracing_subscriber::EnvFilter;

use crease::server::{
    config::Config,
    model::{app::AppState, sync::SyncGuard},
    router,
    scheduler::Scheduler,
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let feed = startup::build_feed_client(&config).unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();

    let sync_guard = SyncGuard::default();

    let scheduler = Scheduler::new(db.clone(), feed.clone(), sync_guard.clone())
        .await
        .unwrap();
    scheduler.start().await.unwrap();

    tracing::info!("Starting server on {}", config.bind_address);

    let state = AppState {
        db,
        feed,
        sync_guard,
        maintenance_secret: config.maintenance_secret.clone(),
    };

    let router = router::routes().with_state(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .unwrap();
    axum::serve(listener, router).await.unwrap();
}

use dioxus_logger::tracing::{self, Level};
use reposearch::server::{
    config::Config, error::Error, model::session::store::SessionMemoryStore, router, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = startup::build_app_state(&config)?;
    let store = SessionMemoryStore::default();
    let session = startup::build_session_layer(&config, store.clone())?;
    startup::spawn_session_cleanup(store, startup::SESSION_CLEANUP_INTERVAL);

    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!(
        addr = %config.listen_addr,
        search_api_url = %config.search_api_url,
        "Starting server"
    );

    axum::serve(listener, app).await?;

    Ok(())
}

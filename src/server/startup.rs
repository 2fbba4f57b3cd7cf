use std::time::Duration as StdDuration;

use dioxus_logger::tracing;
use tokio::task::JoinHandle;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, ExpiredDeletion, SessionManagerLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    model::{app::AppState, session::store::SessionMemoryStore},
};

/// How often expired sessions are dropped from the in-memory store
pub const SESSION_CLEANUP_INTERVAL: StdDuration = StdDuration::from_secs(5 * 60);

/// Build the HTTP client used for upstream search requests
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let http_client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()?;

    Ok(http_client)
}

/// Build the application state shared by all handlers
pub fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let http_client = build_http_client(config)?;

    Ok(AppState {
        http_client,
        search_api_url: config.search_api_url.clone(),
    })
}

/// Configure session management
///
/// Sessions live in `store`; the session id cookie is signed with the configured secret so a
/// client cannot forge another client's session id. Sessions expire after 7 days without a
/// request, expired records are dropped by [`spawn_session_cleanup`].
pub fn build_session_layer(
    config: &Config,
    store: SessionMemoryStore,
) -> Result<SessionManagerLayer<SessionMemoryStore, SignedCookie>, Error> {
    use time::Duration;

    let key = Key::try_from(config.secret_key.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "SECRET_KEY".to_string(),
            reason: e.to_string(),
        }
    })?;

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Ok(session)
}

/// Spawn the background task deleting expired sessions every `period`
///
/// A failed pass is logged and retried on the next tick.
pub fn spawn_session_cleanup(store: SessionMemoryStore, period: StdDuration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;

            if let Err(e) = store.delete_expired().await {
                tracing::warn!("Failed to delete expired sessions: {}", e);
            }
        }
    })
}

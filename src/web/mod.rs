use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::state::AppState;

pub mod account;
pub mod admin;
mod error;
pub mod flash;
mod home;
pub mod renewal;
pub mod views;

pub use error::WebError;

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    Ok(Arc::new(AppState::new(config).await?))
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = &state.config.server;

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_inactivity_minutes,
        )));

    let admin_routes = Router::new()
        .route("/admin_dashboard", get(admin::dashboard))
        .route(
            "/update_status/{request_id}/{new_status}",
            get(admin::update_status),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin,
        ));

    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        .route(
            "/register",
            get(account::register_page).post(account::register),
        )
        .route("/login", get(account::login_page).post(account::login))
        .route(
            "/renew",
            get(renewal::renew_page)
                .post(renewal::renew)
                .layer(DefaultBodyLimit::max(state.config.uploads.max_upload_bytes)),
        )
        .route("/status", get(renewal::status_page).post(renewal::status))
        .route("/admin_login", get(admin::login_page).post(admin::login))
        .merge(admin_routes)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use thermohub_app::ports::RuleStore;

use crate::error::MessageBody;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a [`CatchPanicLayer`]
/// turning handler panics into 500 responses.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: RuleStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<MessageBody> {
    Json(MessageBody::new("OK"))
}

//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod relays;
#[allow(clippy::missing_errors_doc)]
pub mod rules;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;

use axum::Router;
use axum::routing::{get, patch};

use thermohub_app::ports::RuleStore;

use crate::state::AppState;

/// Build the API router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: RuleStore + Send + Sync + 'static,
{
    Router::new()
        .route("/rules", get(rules::get::<S>))
        .route("/sensors", get(sensors::list::<S>))
        .route("/relays", patch(relays::patch::<S>))
}

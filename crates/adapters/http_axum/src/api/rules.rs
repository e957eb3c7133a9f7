//! JSON handler for the rule tree.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use thermohub_app::ports::RuleStore;
use thermohub_domain::rules::RuleSet;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RuleSet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /rules`
pub async fn get<S>(State(state): State<AppState<S>>) -> Result<GetResponse, ApiError>
where
    S: RuleStore + Send + Sync + 'static,
{
    let rules = state.rule_service.get_rules().await?;
    Ok(GetResponse::Ok(Json(rules)))
}

//! JSON handler for per-relay sensor status.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use thermohub_app::ports::RuleStore;
use thermohub_domain::status::SensorReading;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body of `GET /sensors`.
#[derive(Serialize)]
pub struct StatusBody {
    pub sensors: Vec<SensorReading>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<StatusBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /sensors`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: RuleStore + Send + Sync + 'static,
{
    let sensors = state.status_service.sensor_status().await?;
    Ok(ListResponse::Ok(Json(StatusBody { sensors })))
}

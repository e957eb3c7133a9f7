//! JSON handler for relay patches.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use thermohub_app::ports::RuleStore;
use thermohub_domain::patch::{FieldUpdate, RelayPatch};
use thermohub_domain::rules::RelayKey;
use thermohub_domain::schedule::ScheduleEntry;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for patching a relay.
///
/// Wire sentinels map onto field updates as follows:
/// - `name`: missing or `""` keeps the stored name
/// - `enable`: missing or `null` keeps the stored flag
/// - `schedule`: missing or `null` keeps the stored schedule, `[]` clears it,
///   anything else replaces it
#[derive(Debug, Deserialize)]
pub struct RelayPatchRequest {
    pub pin: i64,
    #[serde(default)]
    pub dec: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub enable: Option<bool>,
    #[serde(default)]
    pub schedule: Option<Vec<ScheduleEntryRequest>>,
}

/// A schedule entry as submitted. Missing fields decode as empty/zero so
/// that a missing `time` is reported as a validation error.
#[derive(Debug, Deserialize)]
pub struct ScheduleEntryRequest {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub temperature: f32,
}

impl From<RelayPatchRequest> for RelayPatch {
    fn from(req: RelayPatchRequest) -> Self {
        let name = req.name.filter(|name| !name.is_empty());
        let schedule = req.schedule.map(|entries| {
            entries
                .into_iter()
                .map(|entry| ScheduleEntry::new(entry.time, entry.temperature))
                .collect()
        });

        Self {
            key: RelayKey::new(req.pin, req.dec),
            name: FieldUpdate::from(name),
            enabled: FieldUpdate::from(req.enable),
            schedule: FieldUpdate::from(schedule),
        }
    }
}

/// Possible responses from the patch endpoint.
pub enum PatchResponse {
    NoContent,
}

impl IntoResponse for PatchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `PATCH /relays`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<RelayPatchRequest>, JsonRejection>,
) -> Result<PatchResponse, ApiError>
where
    S: RuleStore + Send + Sync + 'static,
{
    let Json(req) = payload?;
    state.rule_service.patch_relay(req.into()).await?;
    Ok(PatchResponse::NoContent)
}

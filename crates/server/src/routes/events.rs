use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use common::types::{ClearResult, DayCount};
use models::event;
use service::pagination::{ListParams, DEFAULT_LIMIT};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateEventInput {
    pub author: String,
    pub reason: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// rows to skip, default 0
    pub skip: Option<u64>,
    /// maximum rows, default 100
    pub limit: Option<u64>,
}

impl From<ListQuery> for ListParams {
    fn from(q: ListQuery) -> Self {
        ListParams::new(q.skip.unwrap_or(0), q.limit.unwrap_or(DEFAULT_LIMIT))
    }
}

#[utoipa::path(
    post, path = "/events", tag = "events",
    request_body = crate::openapi::CreateEventDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::EventDoc),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create_event(
    State(state): State<ServerState>,
    payload: Result<Json<CreateEventInput>, JsonRejection>,
) -> Result<Json<event::Model>, JsonApiError> {
    let Json(input) = payload.map_err(JsonApiError::from_json_rejection)?;
    let created = state
        .events
        .create(&input.author, &input.reason)
        .await
        .map_err(|e| JsonApiError::from_service("Create Failed", e))?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/events", tag = "events",
    params(ListQuery),
    responses(
        (status = 200, description = "Events, newest first"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list_events(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<event::Model>>, JsonApiError> {
    let Query(q) = query.map_err(JsonApiError::from_query_rejection)?;
    let list = state
        .events
        .list(q.into())
        .await
        .map_err(|e| JsonApiError::from_service("List Failed", e))?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/events/count", tag = "events",
    responses(
        (status = 200, description = "Whole days since the most recent event", body = crate::openapi::DayCountDoc),
        (status = 500, description = "Count Failed")
    )
)]
pub async fn count_days_since_last(State(state): State<ServerState>) -> Result<Json<DayCount>, JsonApiError> {
    let count = state
        .events
        .days_since_last(Utc::now())
        .await
        .map_err(|e| JsonApiError::from_service("Count Failed", e))?;
    Ok(Json(DayCount { count }))
}

#[utoipa::path(
    delete, path = "/events", tag = "events",
    responses(
        (status = 200, description = "Cleared", body = crate::openapi::ClearResultDoc),
        (status = 500, description = "Clear Failed, detail carries the storage error")
    )
)]
pub async fn clear_events(State(state): State<ServerState>) -> Result<Json<ClearResult>, JsonApiError> {
    let deleted = state
        .events
        .clear_all()
        .await
        .map_err(|e| JsonApiError::from_service_verbose("Clear Failed", e))?;
    info!(deleted, "clear events request");
    Ok(Json(ClearResult { message: "All events have been cleared".to_string(), deleted }))
}

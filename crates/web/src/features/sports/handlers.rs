use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::event::{GetEventResponse, ListEventsRequest, ListEventsResponse},
    repository::EventRepository,
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/v1/list-events",
    request_body = ListEventsRequest,
    responses(
        (status = 200, description = "Events matching the filter", body = ListEventsResponse)
    ),
    tag = "sports"
)]
pub async fn list_events(
    State(db): State<Database>,
    Json(req): Json<ListEventsRequest>,
) -> WebResult<Json<ListEventsResponse>> {
    let repo = EventRepository::new(&db);
    let response = services::list_events(&repo, req.filter.as_ref()).await?;

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = GetEventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "sports"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> WebResult<Json<GetEventResponse>> {
    let repo = EventRepository::new(&db);
    let response = services::get_event(&repo, id).await?;

    Ok(Json(response))
}

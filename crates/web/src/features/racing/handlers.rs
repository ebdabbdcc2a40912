use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::race::{GetRaceResponse, ListRacesRequest, ListRacesResponse},
    repository::RaceRepository,
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/v1/list-races",
    request_body = ListRacesRequest,
    responses(
        (status = 200, description = "Races matching the filter", body = ListRacesResponse)
    ),
    tag = "racing"
)]
pub async fn list_races(
    State(db): State<Database>,
    Json(req): Json<ListRacesRequest>,
) -> WebResult<Json<ListRacesResponse>> {
    let repo = RaceRepository::new(&db);
    let response = services::list_races(&repo, req.filter.as_ref()).await?;

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/races/{id}",
    params(
        ("id" = i64, Path, description = "Race id")
    ),
    responses(
        (status = 200, description = "Race found", body = GetRaceResponse),
        (status = 404, description = "Race not found")
    ),
    tag = "racing"
)]
pub async fn get_race(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> WebResult<Json<GetRaceResponse>> {
    let repo = RaceRepository::new(&db);
    let response = services::get_race(&repo, id).await?;

    Ok(Json(response))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Race, Status};

/// Filter accepted by the list-races endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ListRacesFilter {
    /// Restrict to these meetings; empty means all meetings.
    #[serde(default)]
    pub meeting_ids: Vec<i64>,

    /// Unset or true includes hidden races; false returns visible races
    /// only.
    pub show_hidden: Option<bool>,

    /// `column [asc|desc]`; unknown columns fall back to the default order.
    pub order_by: Option<String>,
}

/// Request payload for listing races.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ListRacesRequest {
    #[serde(default)]
    pub filter: Option<ListRacesFilter>,
}

/// A race as returned to clients, annotated with its lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResponse {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    /// Derived from the advertised start at response time; never stored.
    pub status: Status,
}

impl RaceResponse {
    pub fn from_record(race: Race, status: Status) -> Self {
        Self {
            id: race.id,
            meeting_id: race.meeting_id,
            name: race.name,
            number: race.number,
            visible: race.visible,
            advertised_start_time: race.advertised_start_time,
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListRacesResponse {
    pub races: Vec<RaceResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetRaceResponse {
    pub race: RaceResponse,
}

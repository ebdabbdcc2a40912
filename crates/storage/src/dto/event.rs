use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Event, Status};

/// Filter accepted by the list-events endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ListEventsFilter {
    /// Restrict to these sports; empty means all sports.
    #[serde(default)]
    pub sport_ids: Vec<i64>,

    /// Unset or true includes hidden events; false returns visible events
    /// only.
    pub show_hidden: Option<bool>,

    /// `column [asc|desc]`; unknown columns fall back to the default order.
    pub order_by: Option<String>,
}

/// Request payload for listing events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ListEventsRequest {
    #[serde(default)]
    pub filter: Option<ListEventsFilter>,
}

/// A sporting event as returned to clients, annotated with its lifecycle
/// status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i64,
    pub sport_id: i64,
    pub name: String,
    pub venue: String,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    /// Derived from the advertised start at response time; never stored.
    pub status: Status,
}

impl EventResponse {
    pub fn from_record(event: Event, status: Status) -> Self {
        Self {
            id: event.id,
            sport_id: event.sport_id,
            name: event.name,
            venue: event.venue,
            visible: event.visible,
            advertised_start_time: event.advertised_start_time,
            home_team: event.home_team,
            away_team: event.away_team,
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListEventsResponse {
    pub events: Vec<EventResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetEventResponse {
    pub event: EventResponse,
}

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sporting event, with its advertised start promoted to an absolute UTC
/// instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub sport_id: i64,
    pub name: String,
    pub venue: String,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
}

/// Row shape at rest; SQLite stores the advertised start as a naive
/// timestamp.
#[derive(Debug, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub sport_id: i64,
    pub name: String,
    pub venue: String,
    pub visible: bool,
    pub advertised_start_time: NaiveDateTime,
    pub home_team: String,
    pub away_team: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            sport_id: row.sport_id,
            name: row.name,
            venue: row.venue,
            visible: row.visible,
            advertised_start_time: row.advertised_start_time.and_utc(),
            home_team: row.home_team,
            away_team: row.away_team,
        }
    }
}

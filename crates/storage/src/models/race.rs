use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A race, with its advertised start promoted to an absolute UTC instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

/// Row shape at rest; SQLite stores the advertised start as a naive
/// timestamp.
#[derive(Debug, FromRow)]
pub struct RaceRow {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: NaiveDateTime,
}

impl From<RaceRow> for Race {
    fn from(row: RaceRow) -> Self {
        Self {
            id: row.id,
            meeting_id: row.meeting_id,
            name: row.name,
            number: row.number,
            visible: row.visible,
            advertised_start_time: row.advertised_start_time.and_utc(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of a catalog record relative to its advertised start.
///
/// Never persisted: derived fresh on every read, so the same record can
/// report different statuses across two calls straddling its start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    /// A record is OPEN only while its advertised start is strictly in the
    /// future; a start equal to `now` is already CLOSED.
    pub fn at(advertised_start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if advertised_start > now {
            Status::Open
        } else {
            Status::Closed
        }
    }
}

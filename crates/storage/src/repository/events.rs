use async_trait::async_trait;

use crate::Database;
use crate::dto::event::ListEventsFilter;
use crate::error::Result;
use crate::filter::{Criteria, compile};
use crate::models::Event;
use crate::models::event::EventRow;

/// Columns a client may order events by. Events additionally allow the team
/// columns; the divergence from races is intentional.
const ORDERABLE_COLUMNS: &[&str] = &[
    "id",
    "sport_id",
    "name",
    "venue",
    "visible",
    "advertised_start_time",
    "home_team",
    "away_team",
];

const LIST_EVENTS: &str = "SELECT id, sport_id, name, venue, visible, advertised_start_time, \
     home_team, away_team FROM events";

const GET_EVENT: &str = "SELECT id, sport_id, name, venue, visible, advertised_start_time, \
     home_team, away_team FROM events WHERE id = ?";

/// Read access to sporting events. The service layer depends on this
/// contract only, so tests can substitute a double for the real repository.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Returns the events matching `filter`, or every event when it is
    /// absent.
    async fn list(&self, filter: Option<&ListEventsFilter>) -> Result<Vec<Event>>;

    /// Returns a single event by id; `None` when no such event exists.
    async fn get(&self, id: i64) -> Result<Option<Event>>;
}

/// Repository for event read operations.
pub struct EventRepository<'a> {
    db: &'a Database,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn criteria(filter: &ListEventsFilter) -> Criteria<'_> {
        Criteria {
            group_column: "sport_id",
            group_ids: &filter.sport_ids,
            show_hidden: filter.show_hidden,
            order_by: filter.order_by.as_deref(),
        }
    }
}

#[async_trait]
impl EventStore for EventRepository<'_> {
    async fn list(&self, filter: Option<&ListEventsFilter>) -> Result<Vec<Event>> {
        self.db.ensure_seeded().await?;

        let criteria = filter.map(Self::criteria);
        let (query, args) = compile(LIST_EVENTS, criteria.as_ref(), ORDERABLE_COLUMNS);

        let mut rows = sqlx::query_as::<_, EventRow>(&query);
        for arg in args {
            rows = rows.bind(arg);
        }

        let events = rows.fetch_all(self.db.pool()).await?;

        Ok(events.into_iter().map(Event::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Event>> {
        self.db.ensure_seeded().await?;

        let row = sqlx::query_as::<_, EventRow>(GET_EVENT)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.map(Event::from))
    }
}

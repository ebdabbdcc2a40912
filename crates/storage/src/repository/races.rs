use async_trait::async_trait;

use crate::Database;
use crate::dto::race::ListRacesFilter;
use crate::error::Result;
use crate::filter::{Criteria, compile};
use crate::models::Race;
use crate::models::race::RaceRow;

/// Columns a client may order races by. Anything else is ignored by the
/// filter compiler.
const ORDERABLE_COLUMNS: &[&str] = &[
    "id",
    "meeting_id",
    "name",
    "number",
    "visible",
    "advertised_start_time",
];

const LIST_RACES: &str =
    "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";

const GET_RACE: &str =
    "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races WHERE id = ?";

/// Read access to races. The service layer depends on this contract only,
/// so tests can substitute a double for the real repository.
#[async_trait]
pub trait RaceStore: Send + Sync {
    /// Returns the races matching `filter`, or every race when it is absent.
    async fn list(&self, filter: Option<&ListRacesFilter>) -> Result<Vec<Race>>;

    /// Returns a single race by id; `None` when no such race exists.
    async fn get(&self, id: i64) -> Result<Option<Race>>;
}

/// Repository for race read operations.
pub struct RaceRepository<'a> {
    db: &'a Database,
}

impl<'a> RaceRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn criteria(filter: &ListRacesFilter) -> Criteria<'_> {
        Criteria {
            group_column: "meeting_id",
            group_ids: &filter.meeting_ids,
            show_hidden: filter.show_hidden,
            order_by: filter.order_by.as_deref(),
        }
    }
}

#[async_trait]
impl RaceStore for RaceRepository<'_> {
    async fn list(&self, filter: Option<&ListRacesFilter>) -> Result<Vec<Race>> {
        self.db.ensure_seeded().await?;

        let criteria = filter.map(Self::criteria);
        let (query, args) = compile(LIST_RACES, criteria.as_ref(), ORDERABLE_COLUMNS);

        let mut rows = sqlx::query_as::<_, RaceRow>(&query);
        for arg in args {
            rows = rows.bind(arg);
        }

        let races = rows.fetch_all(self.db.pool()).await?;

        Ok(races.into_iter().map(Race::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Race>> {
        self.db.ensure_seeded().await?;

        let row = sqlx::query_as::<_, RaceRow>(GET_RACE)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.map(Race::from))
    }
}

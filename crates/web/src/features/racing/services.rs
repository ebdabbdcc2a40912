use chrono::Utc;
use storage::{
    dto::race::{GetRaceResponse, ListRacesFilter, ListRacesResponse, RaceResponse},
    error::{Result, StorageError},
    models::Status,
    repository::RaceStore,
};

/// Lists races matching `filter`, annotating each with its lifecycle
/// status. "Now" is captured once so the whole response reflects a single
/// snapshot.
pub async fn list_races(
    store: &impl RaceStore,
    filter: Option<&ListRacesFilter>,
) -> Result<ListRacesResponse> {
    let races = store.list(filter).await?;

    let now = Utc::now();
    let races = races
        .into_iter()
        .map(|race| {
            let status = Status::at(race.advertised_start_time, now);
            RaceResponse::from_record(race, status)
        })
        .collect();

    Ok(ListRacesResponse { races })
}

/// Fetches a single race by id. A missing id is NotFound, distinct from a
/// storage failure.
pub async fn get_race(store: &impl RaceStore, id: i64) -> Result<GetRaceResponse> {
    let race = store.get(id).await?.ok_or(StorageError::NotFound)?;

    let status = Status::at(race.advertised_start_time, Utc::now());

    Ok(GetRaceResponse {
        race: RaceResponse::from_record(race, status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration};
    use storage::models::Race;

    struct StubStore {
        races: Vec<Race>,
    }

    #[async_trait]
    impl RaceStore for StubStore {
        async fn list(&self, _filter: Option<&ListRacesFilter>) -> Result<Vec<Race>> {
            Ok(self.races.clone())
        }

        async fn get(&self, id: i64) -> Result<Option<Race>> {
            Ok(self.races.iter().find(|r| r.id == id).cloned())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl RaceStore for FailingStore {
        async fn list(&self, _filter: Option<&ListRacesFilter>) -> Result<Vec<Race>> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }

        async fn get(&self, _id: i64) -> Result<Option<Race>> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }
    }

    fn race(id: i64, start: DateTime<Utc>) -> Race {
        Race {
            id,
            meeting_id: 1,
            name: format!("Race {id}"),
            number: id,
            visible: true,
            advertised_start_time: start,
        }
    }

    #[tokio::test]
    async fn list_classifies_each_race_against_one_snapshot() {
        let now = Utc::now();
        let store = StubStore {
            races: vec![
                race(1, now - Duration::hours(1)),
                race(2, now + Duration::hours(1)),
            ],
        };

        let response = list_races(&store, None).await.unwrap();

        assert_eq!(response.races[0].status, Status::Closed);
        assert_eq!(response.races[1].status, Status::Open);
    }

    #[tokio::test]
    async fn get_classifies_the_returned_race() {
        let store = StubStore {
            races: vec![race(4, Utc::now() + Duration::hours(2))],
        };

        let response = get_race(&store, 4).await.unwrap();

        assert_eq!(response.race.id, 4);
        assert_eq!(response.race.status, Status::Open);
    }

    #[tokio::test]
    async fn get_missing_race_is_not_found() {
        let store = StubStore { races: vec![] };

        let err = get_race(&store, 42).await.unwrap_err();

        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn storage_failures_propagate_unchanged() {
        let err = list_races(&FailingStore, None).await.unwrap_err();

        assert!(matches!(err, StorageError::Database(_)));
    }
}

use chrono::Utc;
use storage::{
    dto::event::{EventResponse, GetEventResponse, ListEventsFilter, ListEventsResponse},
    error::{Result, StorageError},
    models::Status,
    repository::EventStore,
};

/// Lists events matching `filter`, annotating each with its lifecycle
/// status. "Now" is captured once so the whole response reflects a single
/// snapshot.
pub async fn list_events(
    store: &impl EventStore,
    filter: Option<&ListEventsFilter>,
) -> Result<ListEventsResponse> {
    let events = store.list(filter).await?;

    let now = Utc::now();
    let events = events
        .into_iter()
        .map(|event| {
            let status = Status::at(event.advertised_start_time, now);
            EventResponse::from_record(event, status)
        })
        .collect();

    Ok(ListEventsResponse { events })
}

/// Fetches a single event by id. A missing id is NotFound, distinct from a
/// storage failure.
pub async fn get_event(store: &impl EventStore, id: i64) -> Result<GetEventResponse> {
    let event = store.get(id).await?.ok_or(StorageError::NotFound)?;

    let status = Status::at(event.advertised_start_time, Utc::now());

    Ok(GetEventResponse {
        event: EventResponse::from_record(event, status),
    })
}

use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_event, list_events};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/list-events", post(list_events))
        .route("/events/:id", get(get_event))
}

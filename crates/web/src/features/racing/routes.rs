use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_race, list_races};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/list-races", post(list_races))
        .route("/races/:id", get(get_race))
}

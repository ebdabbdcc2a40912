use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::racing::handlers::list_races,
        features::racing::handlers::get_race,
        features::sports::handlers::list_events,
        features::sports::handlers::get_event,
    ),
    components(
        schemas(
            storage::dto::race::ListRacesRequest,
            storage::dto::race::ListRacesFilter,
            storage::dto::race::ListRacesResponse,
            storage::dto::race::GetRaceResponse,
            storage::dto::race::RaceResponse,
            storage::dto::event::ListEventsRequest,
            storage::dto::event::ListEventsFilter,
            storage::dto::event::ListEventsResponse,
            storage::dto::event::GetEventResponse,
            storage::dto::event::EventResponse,
            storage::models::Status,
        )
    ),
    tags(
        (name = "racing", description = "Read-only race catalog"),
        (name = "sports", description = "Read-only sporting event catalog"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting catalog API");

    let config = Config::from_env().context("Failed to load API configuration")?;

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to open catalog database")?;

    db.ensure_seeded()
        .await
        .context("Failed to seed catalog database")?;
    tracing::info!("Catalog database ready");

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/v1",
            features::racing::routes::routes().merge(features::sports::routes::routes()),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Listening on http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, patch},
    Json, Router,
};
use repository::Repository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

pub mod event;
mod not_found;
mod pages;
mod response;

pub use response::ErrorResp;

pub enum ApiError {
    NotFound(String),
    ServerError(String),
}

#[derive(OpenApi)]
#[openapi(
    paths(
        event::post_event,
        event::get_events,
        event::get_event,
        event::put_event,
        event::patch_event_status,
        event::delete_event,
    ),
    components(schemas(
        event::request::EventParam,
        event::request::PatchEventStatusParam,
        event::response::EventResp,
        event::response::DeleteEventResp,
        ErrorResp,
    )),
    tags(
        (name = "events", description = "Medal tally events")
    )
)]
pub struct ApiDoc;

pub fn serve(
    repository: Repository,
    config: &util::Config,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let origins = config
        .server
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    // events
    let event_router = Router::new()
        .route("/", get(event::get_events).post(event::post_event))
        .route(
            "/:id",
            get(event::get_event)
                .put(event::put_event)
                .delete(event::delete_event),
        )
        .route("/:id/status", patch(event::patch_event_status))
        .fallback(not_found::get_404)
        .with_state(repository);

    let router = Router::new()
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .route("/healthz", get(|| async { StatusCode::OK }))
        .nest("/api/events", event_router)
        .merge(pages::router(&config.paths))
        .fallback(not_found::get_404)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(router)
}

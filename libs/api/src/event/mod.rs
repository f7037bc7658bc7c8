use axum::{
    extract::{Path, State},
    Json,
};
use entity::prelude::{EventEntity, EventFields};
use repository::Repository;

pub mod request;
pub mod response;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiError,
};

use self::{
    request::{EventParam, PatchEventStatusParam},
    response::{DeleteEventResp, EventResp},
};

const EVENT_NOT_FOUND: &str = "Event not found";
const EVENT_DELETED: &str = "Event deleted successfully";

/// Create an event
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = EventParam,
    responses(
        (status = 200, description = "Event created", body = EventResp),
        (status = 500, description = "Store unavailable", body = crate::ErrorResp)
    )
)]
pub async fn post_event(
    State(repo): State<Repository>,
    Json(params): Json<EventParam>,
) -> ApiResponse<Json<EventResp>> {
    let event = repo
        .event
        .save(EventFields::from(params))
        .await
        .into_response("500-001")?;

    Ok(Json(event.into()))
}

/// List all events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    responses(
        (status = 200, description = "All events", body = [EventResp]),
        (status = 500, description = "Store unavailable", body = crate::ErrorResp)
    )
)]
pub async fn get_events(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<EventResp>>> {
    let events = repo.event.find_all().await.into_response("500-002")?;

    Ok(Json(events.into_iter().map(EventResp::from).collect()))
}

/// Get one event
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = EventResp),
        (status = 404, description = "No such event", body = crate::ErrorResp),
        (status = 500, description = "Store unavailable", body = crate::ErrorResp)
    )
)]
pub async fn get_event(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<EventResp>> {
    let event = repo.event.find_by_id(id).await.into_response("500-003")?;

    let Some(event) = event else {
        return Err(ApiError::NotFound(EVENT_NOT_FOUND.to_string()));
    };

    Ok(Json(event.into()))
}

/// Overwrite an event
///
/// All three fields are replaced. An unknown id is not an error: nothing is
/// written and the requested values are echoed back.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    request_body = EventParam,
    responses(
        (status = 200, description = "Requested values", body = EventResp),
        (status = 500, description = "Store unavailable", body = crate::ErrorResp)
    )
)]
pub async fn put_event(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Json(params): Json<EventParam>,
) -> ApiResponse<Json<EventResp>> {
    let fields = EventFields::from(params);
    repo.event
        .update(id, fields.clone())
        .await
        .into_response("500-004")?;

    Ok(Json(EventEntity::with_fields(id, fields).into()))
}

/// Change only the status of an event
#[utoipa::path(
    patch,
    path = "/api/events/{id}/status",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    request_body = PatchEventStatusParam,
    responses(
        (status = 200, description = "Updated event", body = EventResp),
        (status = 404, description = "No such event", body = crate::ErrorResp),
        (status = 500, description = "Store unavailable", body = crate::ErrorResp)
    )
)]
pub async fn patch_event_status(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Json(params): Json<PatchEventStatusParam>,
) -> ApiResponse<Json<EventResp>> {
    let updated = repo
        .event
        .update_status(id, params.status)
        .await
        .into_response("500-005")?;
    if updated == 0 {
        return Err(ApiError::NotFound(EVENT_NOT_FOUND.to_string()));
    }

    let event = repo.event.find_by_id(id).await.into_response("500-006")?;
    let Some(event) = event else {
        return Err(ApiError::NotFound(EVENT_NOT_FOUND.to_string()));
    };

    Ok(Json(event.into()))
}

/// Delete an event
///
/// Succeeds whether or not the id existed.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = DeleteEventResp),
        (status = 500, description = "Store unavailable", body = crate::ErrorResp)
    )
)]
pub async fn delete_event(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<DeleteEventResp>> {
    repo.event.delete(id).await.into_response("500-007")?;

    Ok(Json(DeleteEventResp {
        message: EVENT_DELETED.to_string(),
    }))
}

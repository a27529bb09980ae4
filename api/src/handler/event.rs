use crate::{extractor::EventPath, model::event::EventResponse};
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventResponse>>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(|events| events.into_iter().map(EventResponse::from).collect())
        .map(Json)
}

pub async fn show_event(
    EventPath(event_id): EventPath,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await
        .and_then(|event| match event {
            Some(event) => Ok(Json(event.into())),
            None => Err(AppError::EntityNotFound("Event not found".into())),
        })
}

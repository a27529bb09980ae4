//! Path extractors that reject with the service's own error shape.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use kernel::model::id::EventId;
use shared::error::AppError;

/// Event id taken from the `:event_id` path segment.
///
/// A segment that is not an integer names no event, so it is rejected as
/// not found rather than with axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct EventPath(pub EventId);

#[async_trait]
impl<S> FromRequestParts<S> for EventPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<EventId>::from_request_parts(parts, state).await {
            Ok(Path(event_id)) => Ok(Self(event_id)),
            Err(rejection) => {
                tracing::debug!(%rejection, "event id is not an integer");
                Err(AppError::EntityNotFound("Event not found".into()))
            }
        }
    }
}

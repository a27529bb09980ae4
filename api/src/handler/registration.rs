use crate::model::registration::{
    CreateRegistrationRequest, CreatedRegistrationResponse, RegistrationResponse,
};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_registration_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RegistrationResponse>>> {
    registry
        .registration_repository()
        .find_all()
        .await
        .map(|items| items.into_iter().map(RegistrationResponse::from).collect())
        .map(Json)
}

pub async fn register(
    State(registry): State<AppRegistry>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<CreatedRegistrationResponse>)> {
    let req = CreateRegistrationRequest::from_body(&body)?;
    let event_id = req.event;

    let registration = registry
        .registration_repository()
        .create(req.into())
        .await
        .inspect_err(|e| {
            if let AppError::RuleViolation(violation) = e {
                tracing::info!(%event_id, %violation, "registration rejected");
            }
        })
        .map_err(AppError::into_registration_failure)?;

    tracing::info!(%event_id, registration_id = %registration.id, "registration accepted");

    Ok((StatusCode::CREATED, Json(registration.into())))
}

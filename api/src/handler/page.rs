use crate::{
    extractor::EventPath,
    model::form::{FormErrors, RegistrationForm},
    view::{self, PageError},
};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use garde::Validate;
use kernel::model::{event::Event, id::EventId};
use registry::AppRegistry;
use shared::error::AppError;

async fn find_event(registry: &AppRegistry, event_id: EventId) -> Result<Event, PageError> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Event not found".into()).into())
}

pub async fn home(State(registry): State<AppRegistry>) -> Result<Html<String>, PageError> {
    let events = registry.event_repository().find_all().await?;
    Ok(Html(view::home(&events)))
}

pub async fn event_detail(
    event_path: Result<EventPath, AppError>,
    State(registry): State<AppRegistry>,
) -> Result<Html<String>, PageError> {
    let EventPath(event_id) = event_path?;
    let event = find_event(&registry, event_id).await?;
    Ok(Html(view::event_detail(&event)))
}

pub async fn registration_form(
    event_path: Result<EventPath, AppError>,
    State(registry): State<AppRegistry>,
) -> Result<Html<String>, PageError> {
    let EventPath(event_id) = event_path?;
    let event = find_event(&registry, event_id).await?;
    Ok(Html(view::registration_form(
        &event,
        &RegistrationForm::default(),
        &FormErrors::default(),
    )))
}

pub async fn submit_registration(
    event_path: Result<EventPath, AppError>,
    State(registry): State<AppRegistry>,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, PageError> {
    let EventPath(event_id) = event_path?;
    let event = find_event(&registry, event_id).await?;
    let form = form.trimmed();

    if let Err(report) = form.validate(&()) {
        let errors = FormErrors::from(&report);
        return Ok(Html(view::registration_form(&event, &form, &errors)).into_response());
    }

    match registry
        .registration_repository()
        .create(form.clone().into_create(event_id))
        .await
    {
        Ok(registration) => {
            tracing::info!(%event_id, registration_id = %registration.id, "registration accepted");
            Ok(Redirect::to("/").into_response())
        }
        Err(AppError::RuleViolation(violation)) => {
            tracing::info!(%event_id, %violation, "registration rejected");
            // the event may have filled up since the lookup above
            let event = find_event(&registry, event_id).await?;
            let errors = FormErrors::from(violation);
            Ok(Html(view::registration_form(&event, &form, &errors)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

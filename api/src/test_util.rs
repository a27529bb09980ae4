use crate::route::routes;
use adapter::repository::in_memory::InMemoryStore;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{DateTime, Utc};
use kernel::model::{
    event::event::CreateEvent, id::EventId, registration::event::CreateRegistration,
};
use kernel::repository::{event::EventRepository, registration::RegistrationRepository};
use registry::AppRegistry;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let app = routes().with_state(AppRegistry::in_memory(store.clone()));
    (app, store)
}

pub async fn seed_event(
    store: &InMemoryStore,
    title: &str,
    date: Option<DateTime<Utc>>,
    max_attendees: i32,
) -> EventId {
    EventRepository::create(
        store,
        CreateEvent::new(
            title.into(),
            format!("About {title}"),
            date,
            "Main hall".into(),
            max_attendees,
        ),
    )
    .await
    .unwrap()
}

pub async fn seed_registration(store: &InMemoryStore, event_id: EventId, email: &str) {
    RegistrationRepository::create(
        store,
        CreateRegistration::new(
            event_id,
            "Seed".into(),
            "Attendee".into(),
            email.into(),
            "".into(),
        ),
    )
    .await
    .unwrap();
}

pub async fn body_text(res: Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn send(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let text = body_text(res).await;
    (status, serde_json::from_str(&text).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, "").await
}

pub async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    (status, body_text(res).await)
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

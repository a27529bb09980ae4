use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::{
    event::{show_event, show_event_list},
    method_not_allowed,
};

pub fn build_event_routers() -> Router<AppRegistry> {
    Router::new()
        .route(
            "/api/events/",
            get(show_event_list).fallback(method_not_allowed),
        )
        .route(
            "/api/events/:event_id/",
            get(show_event).fallback(method_not_allowed),
        )
}

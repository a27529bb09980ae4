use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::page::{event_detail, home, registration_form, submit_registration};

pub fn build_page_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(home))
        .route("/event/:event_id/", get(event_detail))
        .route(
            "/event/:event_id/register/",
            get(registration_form).post(submit_registration),
        )
}

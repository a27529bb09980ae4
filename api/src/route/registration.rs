use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::{
    method_not_allowed,
    registration::{register, show_registration_list},
};

pub fn build_registration_routers() -> Router<AppRegistry> {
    Router::new().route(
        "/api/registrations/",
        get(show_registration_list)
            .post(register)
            .fallback(method_not_allowed),
    )
}

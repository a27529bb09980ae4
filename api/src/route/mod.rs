use axum::Router;
use registry::AppRegistry;

pub mod event;
pub mod health;
pub mod page;
pub mod registration;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(page::build_page_routers())
        .merge(event::build_event_routers())
        .merge(registration::build_registration_routers())
}

use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{get_page, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_endpoints_report_ok() {
        let (app, _) = test_app();
        assert_eq!(get_page(&app, "/health").await.0, StatusCode::OK);
        assert_eq!(get_page(&app, "/health/db").await.0, StatusCode::OK);
    }
}

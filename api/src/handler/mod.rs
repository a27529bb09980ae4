use shared::error::AppError;

pub mod event;
pub mod health;
pub mod page;
pub mod registration;

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

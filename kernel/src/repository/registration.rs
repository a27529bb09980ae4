use crate::model::registration::{event::CreateRegistration, Registration};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Resolves the target event, applies the registration rules and stores
    /// the registration with a server-assigned `registered_at`.
    ///
    /// Fails with `EntityNotFound` when the event does not exist and with
    /// `RuleViolation` when a rule rejects the attempt.
    async fn create(&self, event: CreateRegistration) -> AppResult<Registration>;
    async fn find_all(&self) -> AppResult<Vec<Registration>>;
}

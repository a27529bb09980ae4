use crate::model::id::{EventId, RegistrationId};
use chrono::{DateTime, Utc};

pub mod event;
pub mod rule;

#[derive(Debug, Clone)]
pub struct Registration {
    pub id: RegistrationId,
    pub event: RegistrationEvent,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RegistrationEvent {
    pub event_id: EventId,
    pub title: String,
}

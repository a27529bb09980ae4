use kernel::model::{
    id::{EventId, RegistrationId},
    registration::{Registration, RegistrationEvent},
};
use sqlx::types::chrono::{DateTime, Utc};

pub const SELECT_REGISTRATION: &str = r#"
    SELECT
        r.registration_id,
        r.event_id,
        e.title AS event_title,
        r.first_name,
        r.last_name,
        r.email,
        r.phone,
        r.registered_at
    FROM registrations AS r
    INNER JOIN events AS e ON r.event_id = e.event_id
"#;

#[derive(sqlx::FromRow)]
pub struct RegistrationRow {
    pub registration_id: RegistrationId,
    pub event_id: EventId,
    pub event_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub registered_at: DateTime<Utc>,
}

impl From<RegistrationRow> for Registration {
    fn from(value: RegistrationRow) -> Self {
        let RegistrationRow {
            registration_id,
            event_id,
            event_title,
            first_name,
            last_name,
            email,
            phone,
            registered_at,
        } = value;
        Registration {
            id: registration_id,
            event: RegistrationEvent {
                event_id,
                title: event_title,
            },
            first_name,
            last_name,
            email,
            phone,
            registered_at,
        }
    }
}

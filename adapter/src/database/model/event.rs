use kernel::model::{event::Event, id::EventId};
use sqlx::types::chrono::{DateTime, Utc};

pub const SELECT_EVENT: &str = r#"
    SELECT
        e.event_id,
        e.title,
        e.description,
        e.date,
        e.location,
        e.max_attendees,
        e.created_at,
        (
            SELECT COUNT(*) FROM registrations AS r
            WHERE r.event_id = e.event_id
        ) AS registration_count
    FROM events AS e
"#;

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub date: Option<DateTime<Utc>>,
    pub location: String,
    pub max_attendees: i32,
    pub created_at: DateTime<Utc>,
    pub registration_count: i64,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            title,
            description,
            date,
            location,
            max_attendees,
            created_at,
            registration_count,
        } = value;
        Event {
            id: event_id,
            title,
            description,
            date,
            location,
            max_attendees,
            registration_count,
            created_at,
        }
    }
}

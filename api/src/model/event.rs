use chrono::{DateTime, Utc};
use kernel::model::{event::Event, id::EventId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub description: String,
    #[serde(with = "super::iso8601::option")]
    pub date: Option<DateTime<Utc>>,
    pub location: String,
    pub max_attendees: i32,
    pub available_spots: i64,
    pub is_full: bool,
    #[serde(with = "super::iso8601")]
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let available_spots = value.available_spots();
        let is_full = value.is_full();
        let Event {
            id,
            title,
            description,
            date,
            location,
            max_attendees,
            registration_count: _,
            created_at,
        } = value;
        Self {
            id,
            title,
            description,
            date,
            location,
            max_attendees,
            available_spots,
            is_full,
            created_at,
        }
    }
}

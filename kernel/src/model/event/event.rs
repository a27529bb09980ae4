use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: Option<DateTime<Utc>>,
    pub location: String,
    pub max_attendees: i32,
}

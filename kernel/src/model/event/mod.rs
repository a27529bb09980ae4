use crate::model::id::EventId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: Option<DateTime<Utc>>,
    pub location: String,
    pub max_attendees: i32,
    // live count at read time, never persisted on the event itself
    pub registration_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn available_spots(&self) -> i64 {
        i64::from(self.max_attendees) - self.registration_count
    }

    pub fn is_full(&self) -> bool {
        self.available_spots() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn event_with(max_attendees: i32, registration_count: i64) -> Event {
        Event {
            id: EventId::new(1),
            title: "Rust Meetup".into(),
            description: String::new(),
            date: None,
            location: "Tokyo".into(),
            max_attendees,
            registration_count,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(10, 0, 10, false)]
    #[case(10, 9, 1, false)]
    #[case(10, 10, 0, true)]
    #[case(0, 0, 0, true)]
    #[case(2, 3, -1, true)]
    fn spots_follow_live_count(
        #[case] max_attendees: i32,
        #[case] count: i64,
        #[case] spots: i64,
        #[case] full: bool,
    ) {
        let event = event_with(max_attendees, count);
        assert_eq!(event.available_spots(), spots);
        assert_eq!(event.is_full(), full);
    }
}

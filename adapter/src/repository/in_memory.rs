//! Process-local store implementing every repository trait.
//!
//! Used when the service runs without PostgreSQL and as the test double for
//! the HTTP layer. One write lock covers the rule checks and the insert of a
//! registration, so concurrent attempts are serialized.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use kernel::model::{
    event::{event::CreateEvent, Event},
    id::{EventId, RegistrationId},
    registration::{event::CreateRegistration, rule, Registration, RegistrationEvent},
};
use kernel::repository::{
    event::EventRepository, health::HealthCheckRepository,
    registration::RegistrationRepository,
};
use shared::error::{AppError, AppResult};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    events: Vec<EventRecord>,
    registrations: Vec<RegistrationRecord>,
    last_event_id: i64,
    last_registration_id: i64,
}

struct EventRecord {
    id: EventId,
    title: String,
    description: String,
    date: Option<DateTime<Utc>>,
    location: String,
    max_attendees: i32,
    created_at: DateTime<Utc>,
}

struct RegistrationRecord {
    id: RegistrationId,
    event_id: EventId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    registered_at: DateTime<Utc>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// microsecond precision, the same as a TIMESTAMPTZ column
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl Tables {
    fn registration_count(&self, event_id: EventId) -> i64 {
        let count = self
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .count();
        i64::try_from(count).unwrap_or(i64::MAX)
    }

    fn to_event(&self, record: &EventRecord) -> Event {
        Event {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
            date: record.date,
            location: record.location.clone(),
            max_attendees: record.max_attendees,
            registration_count: self.registration_count(record.id),
            created_at: record.created_at,
        }
    }

    fn find_event(&self, event_id: EventId) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == event_id)
    }

    fn to_registration(&self, record: &RegistrationRecord) -> AppResult<Registration> {
        let event = self.find_event(record.event_id).ok_or_else(|| {
            AppError::ConversionEntityError(format!(
                "registration {} references missing event {}",
                record.id, record.event_id
            ))
        })?;
        Ok(Registration {
            id: record.id,
            event: RegistrationEvent {
                event_id: event.id,
                title: event.title.clone(),
            },
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            registered_at: record.registered_at,
        })
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let mut tables = self.inner.write().await;
        tables.last_event_id += 1;
        let id = EventId::new(tables.last_event_id);
        let CreateEvent {
            title,
            description,
            date,
            location,
            max_attendees,
        } = event;
        tables.events.push(EventRecord {
            id,
            title,
            description,
            date,
            location,
            max_attendees,
            created_at: now(),
        });
        Ok(id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let tables = self.inner.read().await;
        let mut events: Vec<Event> = tables.events.iter().map(|e| tables.to_event(e)).collect();
        events.sort_by_key(|e| (e.date.is_none(), e.date, e.id));
        Ok(events)
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let tables = self.inner.read().await;
        Ok(tables.find_event(event_id).map(|e| tables.to_event(e)))
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn create(&self, event: CreateRegistration) -> AppResult<Registration> {
        let mut tables = self.inner.write().await;

        let target = tables
            .find_event(event.event_id)
            .map(|e| tables.to_event(e))
            .ok_or_else(|| AppError::EntityNotFound("Event not found".into()))?;
        let email_registered = tables
            .registrations
            .iter()
            .any(|r| r.event_id == event.event_id && rule::same_email(&r.email, &event.email));

        rule::evaluate(&target, email_registered)?;

        tables.last_registration_id += 1;
        let record = RegistrationRecord {
            id: RegistrationId::new(tables.last_registration_id),
            event_id: event.event_id,
            first_name: event.first_name,
            last_name: event.last_name,
            email: event.email,
            phone: event.phone,
            registered_at: now(),
        };
        let registration = tables.to_registration(&record)?;
        tables.registrations.push(record);
        Ok(registration)
    }

    async fn find_all(&self) -> AppResult<Vec<Registration>> {
        let tables = self.inner.read().await;
        tables
            .registrations
            .iter()
            .map(|r| tables.to_registration(r))
            .collect()
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

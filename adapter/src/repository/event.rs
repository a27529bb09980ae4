use crate::database::{
    model::event::{EventRow, SELECT_EVENT},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{event::CreateEvent, Event},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        sqlx::query_scalar::<_, EventId>(
            r#"
                INSERT INTO events (title, description, date, location, max_attendees)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING event_id
            "#,
        )
        .bind(event.title)
        .bind(event.description)
        .bind(event.date)
        .bind(event.location)
        .bind(event.max_attendees)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let sql = format!("{SELECT_EVENT} ORDER BY e.date ASC NULLS LAST, e.event_id ASC");
        sqlx::query_as::<_, EventRow>(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(Event::from).collect())
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let sql = format!("{SELECT_EVENT} WHERE e.event_id = $1");
        sqlx::query_as::<_, EventRow>(&sql)
            .bind(event_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map(|row| row.map(Event::from))
            .map_err(AppError::SpecificOperationError)
    }
}

use crate::database::{
    model::{
        event::{EventRow, SELECT_EVENT},
        registration::{RegistrationRow, SELECT_REGISTRATION},
    },
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::Event,
    id::{EventId, RegistrationId},
    registration::{event::CreateRegistration, rule, Registration, RegistrationEvent},
};
use kernel::repository::registration::RegistrationRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(new)]
pub struct RegistrationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    async fn create(&self, event: CreateRegistration) -> AppResult<Registration> {
        let mut tx = self.db.begin().await?;

        // the capacity and duplicate checks must see the same snapshot the
        // insert commits against
        self.set_transaction_serializable(&mut tx).await?;

        let target: Event = {
            let sql = format!("{SELECT_EVENT} WHERE e.event_id = $1");
            sqlx::query_as::<_, EventRow>(&sql)
                .bind(event.event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?
                .map(Event::from)
                .ok_or_else(|| AppError::EntityNotFound("Event not found".into()))?
        };

        let email_registered: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM registrations
                    WHERE event_id = $1 AND email = $2
                )
            "#,
        )
        .bind(event.event_id)
        .bind(&event.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        rule::evaluate(&target, email_registered)?;

        let (registration_id, registered_at): (RegistrationId, DateTime<Utc>) = sqlx::query_as(
            r#"
                INSERT INTO registrations (event_id, first_name, last_name, email, phone)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING registration_id, registered_at
            "#,
        )
        .bind(event.event_id)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(&event.phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        let CreateRegistration {
            event_id,
            first_name,
            last_name,
            email,
            phone,
        } = event;
        Ok(Registration {
            id: registration_id,
            event: RegistrationEvent {
                event_id,
                title: target.title,
            },
            first_name,
            last_name,
            email,
            phone,
            registered_at,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Registration>> {
        let sql = format!("{SELECT_REGISTRATION} ORDER BY r.registration_id ASC");
        sqlx::query_as::<_, RegistrationRow>(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(Registration::from).collect())
            .map_err(AppError::SpecificOperationError)
    }
}

impl RegistrationRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::event::EventRepositoryImpl;
    use kernel::model::event::event::CreateEvent;
    use kernel::repository::event::EventRepository;
    use shared::error::RuleViolation;

    fn attendee(event_id: EventId, email: &str) -> CreateRegistration {
        CreateRegistration::new(
            event_id,
            "Ada".into(),
            "Lovelace".into(),
            email.into(),
            "".into(),
        )
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_registration_rules(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let events = EventRepositoryImpl::new(db.clone());
        let repo = RegistrationRepositoryImpl::new(db);

        let event_id = events
            .create(CreateEvent::new("Tiny".into(), "".into(), None, "Room".into(), 2))
            .await?;

        let first = repo.create(attendee(event_id, "a@example.com")).await?;
        assert_eq!(first.event.event_id, event_id);
        assert_eq!(first.event.title, "Tiny");

        let dup = repo.create(attendee(event_id, "a@example.com")).await;
        assert!(matches!(
            dup,
            Err(AppError::RuleViolation(RuleViolation::AlreadyRegistered))
        ));

        repo.create(attendee(event_id, "A@example.com")).await?;

        let full = repo.create(attendee(event_id, "a@example.com")).await;
        assert!(matches!(
            full,
            Err(AppError::RuleViolation(RuleViolation::EventFull))
        ));

        let missing = repo.create(attendee(EventId::new(99999), "b@example.com")).await;
        assert!(matches!(missing, Err(AppError::EntityNotFound(_))));

        let event = events.find_by_id(event_id).await?.unwrap();
        assert_eq!(event.available_spots(), 0);
        assert!(event.is_full());

        assert_eq!(repo.find_all().await?.len(), 2);
        Ok(())
    }
}

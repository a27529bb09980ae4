use chrono::{DateTime, Utc};
use kernel::model::{
    id::{EventId, RegistrationId},
    registration::{event::CreateRegistration, Registration},
};
use serde::Serialize;
use serde_json::{Map, Value};
use shared::error::{AppError, AppResult};

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";

const REQUIRED_FIELDS: [&str; 4] = ["event", "first_name", "last_name", "email"];

#[derive(Debug, PartialEq, Eq)]
pub struct CreateRegistrationRequest {
    pub event: EventId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl CreateRegistrationRequest {
    /// Parses a raw request body.
    ///
    /// Required fields are checked in declaration order and only the first
    /// missing one is reported. `event` may be a number or a numeric string;
    /// an absent or null `phone` becomes an empty string.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error.message = %e, "rejected request body");
            AppError::InvalidJson
        })?;
        let Value::Object(data) = value else {
            return Err(AppError::InvalidJson);
        };

        if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !data.contains_key(**f)) {
            return Err(AppError::ValidationError(format!(
                "Missing required field: {field}"
            )));
        }

        Ok(Self {
            event: event_id(&data)?,
            first_name: text(&data, "first_name")?,
            last_name: text(&data, "last_name")?,
            email: text(&data, "email")?,
            phone: match data.get("phone") {
                None | Some(Value::Null) => String::new(),
                Some(_) => text(&data, "phone")?,
            },
        })
    }
}

fn invalid(field: &str) -> AppError {
    AppError::ValidationError(format!("Invalid value for field: {field}"))
}

fn event_id(data: &Map<String, Value>) -> AppResult<EventId> {
    match data.get("event") {
        Some(Value::Number(n)) => n.as_i64().map(EventId::new),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
    .ok_or_else(|| invalid("event"))
}

fn text(data: &Map<String, Value>, field: &str) -> AppResult<String> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| invalid(field))
}

impl From<CreateRegistrationRequest> for CreateRegistration {
    fn from(value: CreateRegistrationRequest) -> Self {
        let CreateRegistrationRequest {
            event,
            first_name,
            last_name,
            email,
            phone,
        } = value;
        CreateRegistration::new(event, first_name, last_name, email, phone)
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub id: RegistrationId,
    pub event: EventId,
    pub event_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "super::iso8601")]
    pub registered_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponse {
    fn from(value: Registration) -> Self {
        let Registration {
            id,
            event,
            first_name,
            last_name,
            email,
            phone,
            registered_at,
        } = value;
        Self {
            id,
            event: event.event_id,
            event_title: event.title,
            first_name,
            last_name,
            email,
            phone,
            registered_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedRegistrationResponse {
    #[serde(flatten)]
    pub registration: RegistrationResponse,
    pub message: &'static str,
}

impl From<Registration> for CreatedRegistrationResponse {
    fn from(value: Registration) -> Self {
        Self {
            registration: value.into(),
            message: REGISTRATION_SUCCESS_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AppResult<CreateRegistrationRequest> {
        CreateRegistrationRequest::from_body(body.as_bytes())
    }

    fn missing_field(res: AppResult<CreateRegistrationRequest>) -> Option<String> {
        match res {
            Err(AppError::ValidationError(msg)) => Some(msg),
            _ => None,
        }
    }

    #[test]
    fn malformed_and_non_object_bodies_are_invalid_json() {
        assert!(matches!(parse("{not json"), Err(AppError::InvalidJson)));
        assert!(matches!(parse("[1, 2]"), Err(AppError::InvalidJson)));
        assert!(matches!(parse(""), Err(AppError::InvalidJson)));
    }

    #[test]
    fn first_missing_field_in_declared_order_is_reported() {
        assert_eq!(
            missing_field(parse(r#"{"first_name": "A"}"#)).as_deref(),
            Some("Missing required field: event")
        );
        assert_eq!(
            missing_field(parse(r#"{"event": 1, "email": "a@b.c"}"#)).as_deref(),
            Some("Missing required field: first_name")
        );
        assert_eq!(
            missing_field(parse(r#"{"event": 1, "first_name": "A", "last_name": "B"}"#))
                .as_deref(),
            Some("Missing required field: email")
        );
    }

    #[test]
    fn event_accepts_numbers_and_numeric_strings() -> AppResult<()> {
        let req = parse(r#"{"event": "12", "first_name": "A", "last_name": "B", "email": "a@b.c"}"#)?;
        assert_eq!(req.event, EventId::new(12));
        assert_eq!(req.phone, "");

        let req = parse(
            r#"{"event": 3, "first_name": "A", "last_name": "B", "email": "a@b.c", "phone": "555"}"#,
        )?;
        assert_eq!(req.event, EventId::new(3));
        assert_eq!(req.phone, "555");

        assert_eq!(
            missing_field(parse(
                r#"{"event": "abc", "first_name": "A", "last_name": "B", "email": "a@b.c"}"#
            ))
            .as_deref(),
            Some("Invalid value for field: event")
        );
        Ok(())
    }

    #[test]
    fn null_phone_becomes_empty() -> AppResult<()> {
        let req = parse(
            r#"{"event": 1, "first_name": "A", "last_name": "B", "email": "a@b.c", "phone": null}"#,
        )?;
        assert_eq!(req.phone, "");
        Ok(())
    }

    #[test]
    fn non_string_names_are_rejected() {
        assert_eq!(
            missing_field(parse(
                r#"{"event": 1, "first_name": null, "last_name": "B", "email": "a@b.c"}"#
            ))
            .as_deref(),
            Some("Invalid value for field: first_name")
        );
    }
}

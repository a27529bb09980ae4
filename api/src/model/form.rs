use garde::{Report, Validate};
use kernel::model::{id::EventId, registration::event::CreateRegistration};
use serde::Deserialize;
use shared::error::RuleViolation;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct RegistrationForm {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub first_name: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    #[garde(email)]
    pub email: String,
    #[serde(default)]
    #[garde(skip)]
    pub phone: String,
}

impl RegistrationForm {
    /// Strips surrounding whitespace so blank names fail validation.
    pub fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    pub fn into_create(self, event_id: EventId) -> CreateRegistration {
        let RegistrationForm {
            first_name,
            last_name,
            email,
            phone,
        } = self;
        CreateRegistration::new(event_id, first_name, last_name, email, phone)
    }
}

/// Messages shown next to the submitted form.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub non_field: Vec<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    fn add_field(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(message.into());
    }
}

impl From<&Report> for FormErrors {
    fn from(report: &Report) -> Self {
        let mut errors = FormErrors::default();
        for (path, error) in report.iter() {
            errors.add_field(path.to_string(), error.to_string());
        }
        errors
    }
}

impl From<RuleViolation> for FormErrors {
    fn from(violation: RuleViolation) -> Self {
        let mut errors = FormErrors::default();
        match violation {
            RuleViolation::EventFull => errors.non_field.push(violation.to_string()),
            RuleViolation::AlreadyRegistered => errors.add_field("email", violation.to_string()),
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_event_is_a_form_level_error() {
        let errors = FormErrors::from(RuleViolation::EventFull);
        assert_eq!(errors.non_field, ["This event is already full."]);
        assert!(errors.fields.is_empty());
    }

    #[test]
    fn duplicate_email_attaches_to_the_email_field() {
        let errors = FormErrors::from(RuleViolation::AlreadyRegistered);
        assert!(errors.non_field.is_empty());
        assert_eq!(
            errors.field("email"),
            ["This email is already registered for this event."]
        );
    }

    #[test]
    fn invalid_fields_are_reported_by_name() {
        let form = RegistrationForm {
            first_name: "".into(),
            last_name: "Turing".into(),
            email: "not-an-email".into(),
            phone: "".into(),
        };
        let report = form.validate(&()).unwrap_err();
        let errors = FormErrors::from(&report);
        assert_eq!(errors.field("first_name").len(), 1);
        assert_eq!(errors.field("email").len(), 1);
        assert!(errors.field("last_name").is_empty());
        assert!(errors.field("phone").is_empty());
    }

    #[test]
    fn whitespace_only_names_fail_once_trimmed() {
        let form = RegistrationForm {
            first_name: "   ".into(),
            last_name: "\t".into(),
            email: " alan@example.com ".into(),
            phone: " ".into(),
        }
        .trimmed();
        assert_eq!(form.email, "alan@example.com");
        assert_eq!(form.phone, "");
        let report = form.validate(&()).unwrap_err();
        let errors = FormErrors::from(&report);
        assert_eq!(errors.field("first_name").len(), 1);
        assert_eq!(errors.field("last_name").len(), 1);
        assert!(errors.field("email").is_empty());
    }

    #[test]
    fn phone_is_optional() {
        let form = RegistrationForm {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: "alan@example.com".into(),
            phone: "".into(),
        };
        assert!(form.validate(&()).is_ok());
    }
}

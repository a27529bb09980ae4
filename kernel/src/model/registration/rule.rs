//! Guard checks that gate every registration attempt.
//!
//! The capacity check runs before the duplicate check and only the first
//! failing check is reported.

use crate::model::event::Event;
use shared::error::RuleViolation;

pub fn evaluate(event: &Event, email_registered: bool) -> Result<(), RuleViolation> {
    if event.is_full() {
        return Err(RuleViolation::EventFull);
    }
    if email_registered {
        return Err(RuleViolation::AlreadyRegistered);
    }
    Ok(())
}

/// Duplicate detection compares addresses exactly as stored.
pub fn same_email(stored: &str, candidate: &str) -> bool {
    stored == candidate
}

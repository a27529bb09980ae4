use crate::model::id::EventId;
use derive_new::new;

#[derive(new, Debug, Clone)]
pub struct CreateRegistration {
    pub event_id: EventId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

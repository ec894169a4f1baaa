pub mod activities;
pub mod events;
pub mod faculty;
pub mod students;

use serde::Serialize;

/// `{"message": "..."}` bodies used by greetings and mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

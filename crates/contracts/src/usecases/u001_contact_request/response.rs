use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Подтверждение приёма заявки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAcknowledgement {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

impl ContactAcknowledgement {
    pub const DEFAULT_MESSAGE: &'static str =
        "Спасибо за ваше сообщение! Я свяжусь с вами в ближайшее время.";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            message: message.into(),
        }
    }
}

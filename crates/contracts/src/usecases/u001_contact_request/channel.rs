use super::form::ContactFormError;
use super::request::ContactRequest;
use super::response::ContactAcknowledgement;

/// Канал доставки заявки (почта, тикет-система и т.п.)
pub trait ContactChannel {
    fn deliver(&self, request: &ContactRequest) -> Result<ContactAcknowledgement, ContactFormError>;
}

/// Канал без сетевой отправки: только локальное подтверждение.
#[derive(Debug, Clone)]
pub struct LocalAcknowledgement {
    message: String,
}

impl LocalAcknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for LocalAcknowledgement {
    fn default() -> Self {
        Self::new(ContactAcknowledgement::DEFAULT_MESSAGE)
    }
}

impl ContactChannel for LocalAcknowledgement {
    fn deliver(&self, _request: &ContactRequest) -> Result<ContactAcknowledgement, ContactFormError> {
        Ok(ContactAcknowledgement::new(self.message.clone()))
    }
}

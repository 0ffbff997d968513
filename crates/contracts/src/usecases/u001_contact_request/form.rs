use super::channel::ContactChannel;
use super::request::{ContactField, ContactRequest};
use super::response::ContactAcknowledgement;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Поле «{}» обязательно для заполнения", .0.label())]
    MissingField(ContactField),

    #[error("Не удалось отправить сообщение: {0}")]
    Delivery(String),
}

/// Черновик формы обратной связи.
///
/// Значения нигде не сохраняются и пропадают вместе со страницей.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Первое незаполненное обязательное поле
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::all()
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn validate(&self) -> Result<ContactRequest, ContactFormError> {
        if let Some(field) = self.missing_field() {
            return Err(ContactFormError::MissingField(field));
        }
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Отправить заявку через канал.
    ///
    /// При успехе поля очищаются и возвращается ровно одно подтверждение.
    /// При ошибке черновик остаётся без изменений.
    pub fn submit<C: ContactChannel + ?Sized>(
        &mut self,
        channel: &C,
    ) -> Result<ContactAcknowledgement, ContactFormError> {
        let request = self.validate()?;
        let ack = channel.deliver(&request)?;
        self.reset();
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u001_contact_request::LocalAcknowledgement;
    use std::cell::Cell;

    struct CountingChannel {
        calls: Cell<usize>,
    }

    impl ContactChannel for CountingChannel {
        fn deliver(&self, _request: &ContactRequest) -> Result<ContactAcknowledgement, ContactFormError> {
            self.calls.set(self.calls.get() + 1);
            Ok(ContactAcknowledgement::new("ok"))
        }
    }

    struct FailingChannel;

    impl ContactChannel for FailingChannel {
        fn deliver(&self, _request: &ContactRequest) -> Result<ContactAcknowledgement, ContactFormError> {
            Err(ContactFormError::Delivery("smtp down".to_string()))
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Иван Иванов".to_string(),
            email: "ivan@example.com".to_string(),
            message: "Хочу обсудить проект дома".to_string(),
        }
    }

    #[test]
    fn test_submit_resets_fields_and_acknowledges_once() {
        let channel = CountingChannel { calls: Cell::new(0) };
        let mut form = filled();

        let ack = form.submit(&channel).unwrap();

        assert_eq!(ack.message, "ok");
        assert_eq!(channel.calls.get(), 1);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_submit_blocked_on_each_missing_field() {
        for field in ContactField::all() {
            let channel = CountingChannel { calls: Cell::new(0) };
            let mut form = filled();
            form.set(field, "   ");
            let before = form.clone();

            assert_eq!(
                form.submit(&channel),
                Err(ContactFormError::MissingField(field))
            );
            assert_eq!(channel.calls.get(), 0);
            assert_eq!(form, before);
        }
    }

    #[test]
    fn test_empty_form_reports_first_field() {
        let form = ContactForm::default();
        assert_eq!(form.missing_field(), Some(ContactField::Name));
        assert!(!form.is_complete());
    }

    #[test]
    fn test_delivery_failure_keeps_draft() {
        let mut form = filled();
        let result = form.submit(&FailingChannel);
        assert!(matches!(result, Err(ContactFormError::Delivery(_))));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_validate_trims_values() {
        let mut form = filled();
        form.set(ContactField::Email, "  ivan@example.com ");
        let request = form.validate().unwrap();
        assert_eq!(request.email, "ivan@example.com");
    }

    #[test]
    fn test_local_acknowledgement_default_message() {
        let mut form = filled();
        let ack = form.submit(&LocalAcknowledgement::default()).unwrap();
        assert_eq!(ack.message, ContactAcknowledgement::DEFAULT_MESSAGE);
    }

    #[test]
    fn test_missing_field_message() {
        let err = ContactFormError::MissingField(ContactField::Email);
        assert_eq!(err.to_string(), "Поле «Email» обязательно для заполнения");
    }
}

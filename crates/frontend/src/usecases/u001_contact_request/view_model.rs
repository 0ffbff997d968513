use contracts::usecases::u001_contact_request::{
    ContactAcknowledgement, ContactChannel, ContactField, ContactForm, ContactFormError,
    LocalAcknowledgement,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

/// ViewModel формы обратной связи
#[derive(Clone, Copy)]
pub struct ContactRequestViewModel {
    pub form: RwSignal<ContactForm>,
    pub acknowledgement: RwSignal<Option<ContactAcknowledgement>>,
    pub error: RwSignal<Option<String>>,
    channel: StoredValue<Arc<dyn ContactChannel + Send + Sync>>,
    ack_timeout_ms: u32,
}

impl ContactRequestViewModel {
    pub fn new(ack_timeout_ms: u32) -> Self {
        Self::with_channel(Arc::new(LocalAcknowledgement::default()), ack_timeout_ms)
    }

    pub fn with_channel(channel: Arc<dyn ContactChannel + Send + Sync>, ack_timeout_ms: u32) -> Self {
        Self {
            form: RwSignal::new(ContactForm::default()),
            acknowledgement: RwSignal::new(None),
            error: RwSignal::new(None),
            channel: StoredValue::new(channel),
            ack_timeout_ms,
        }
    }

    pub fn field(&self, field: ContactField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    }

    pub fn set_field(&self, field: ContactField, value: String) {
        self.form.update(|f| f.set(field, value));
        self.error.set(None);
    }

    /// Отправить форму. Незаполненная форма не даёт подтверждения.
    pub fn submit_command(&self) {
        let channel = self.channel.get_value();
        let mut form = self.form.get_untracked();

        match form.submit(&*channel) {
            Ok(ack) => {
                log::info!("contact request accepted: {}", ack.id);
                self.form.set(form);
                self.error.set(None);
                self.acknowledgement.set(Some(ack.clone()));
                self.schedule_hide(ack);
            }
            Err(e @ ContactFormError::MissingField(_)) => {
                log::debug!("contact request blocked: {}", e);
                self.error.set(Some(e.to_string()));
            }
            Err(e) => {
                log::warn!("contact request failed: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn dismiss_acknowledgement(&self) {
        self.acknowledgement.set(None);
    }

    fn schedule_hide(&self, ack: ContactAcknowledgement) {
        if self.ack_timeout_ms == 0 {
            return;
        }
        let acknowledgement = self.acknowledgement;
        let timeout = self.ack_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            // a newer acknowledgement keeps its own timer
            let is_same = acknowledgement
                .try_with_untracked(|current| current.as_ref().map(|a| a.id) == Some(ack.id))
                .unwrap_or(false);
            if is_same {
                acknowledgement.set(None);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u001_contact_request::ContactRequest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingChannel {
        delivered: AtomicUsize,
    }

    impl ContactChannel for CountingChannel {
        fn deliver(&self, _request: &ContactRequest) -> Result<ContactAcknowledgement, ContactFormError> {
            self.delivered.fetch_add(1, Ordering::SeqCst);
            Ok(ContactAcknowledgement::new("ok"))
        }
    }

    fn fill(vm: &ContactRequestViewModel) {
        vm.set_field(ContactField::Name, "Мария".to_string());
        vm.set_field(ContactField::Email, "maria@example.com".to_string());
        vm.set_field(ContactField::Message, "Нужен проект дома".to_string());
    }

    #[test]
    fn test_incomplete_form_is_blocked() {
        let owner = Owner::new();
        owner.set();

        let channel = Arc::new(CountingChannel::default());
        let vm = ContactRequestViewModel::with_channel(channel.clone(), 0);
        vm.set_field(ContactField::Name, "Мария".to_string());

        vm.submit_command();

        assert!(vm.acknowledgement.get_untracked().is_none());
        assert_eq!(
            vm.error.get_untracked(),
            Some(ContactFormError::MissingField(ContactField::Email).to_string())
        );
        assert_eq!(vm.field(ContactField::Name).get_untracked(), "Мария");
        assert_eq!(channel.delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_complete_form_is_acknowledged_once_and_cleared() {
        let owner = Owner::new();
        owner.set();

        let channel = Arc::new(CountingChannel::default());
        let vm = ContactRequestViewModel::with_channel(channel.clone(), 0);
        fill(&vm);

        vm.submit_command();

        assert_eq!(channel.delivered.load(Ordering::SeqCst), 1);
        assert_eq!(vm.acknowledgement.get_untracked().map(|a| a.message), Some("ok".to_string()));
        assert!(vm.error.get_untracked().is_none());
        assert_eq!(vm.form.get_untracked(), ContactForm::default());

        vm.dismiss_acknowledgement();
        assert!(vm.acknowledgement.get_untracked().is_none());
    }

    #[test]
    fn test_editing_clears_error() {
        let owner = Owner::new();
        owner.set();

        let vm = ContactRequestViewModel::new(0);
        vm.submit_command();
        assert!(vm.error.get_untracked().is_some());

        vm.set_field(ContactField::Name, "И".to_string());
        assert!(vm.error.get_untracked().is_none());
    }
}

use super::view_model::ContactRequestViewModel;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::section_header::SectionHeader;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::config::use_site_config;
use crate::shared::icons::icon_sized;
use contracts::enums::LandingSection;
use contracts::usecases::u001_contact_request::ContactField;
use leptos::prelude::*;

/// Раздел «Контакты»: форма обратной связи и контактные данные студии.
///
/// Сообщение никуда не отправляется: после отправки показывается
/// подтверждение и поля очищаются.
#[component]
pub fn ContactRequestForm() -> impl IntoView {
    let config = use_site_config();
    let vm = ContactRequestViewModel::new(config.form.ack_timeout_ms);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    let on_field = move |field: ContactField| Callback::new(move |value: String| vm.set_field(field, value));

    view! {
        <section id=LandingSection::Contact.anchor() class="section section--tinted">
            <div class="container container--narrow">
                <SectionHeader title="Контакты" subtitle="Давайте обсудим ваш проект" />

                <CardAnimated class="contact-card">
                    <Show when=move || vm.acknowledgement.get().is_some()>
                        <div class="notice notice--success" role="status">
                            <span>
                                {move || vm.acknowledgement.get().map(|a| a.message).unwrap_or_default()}
                            </span>
                            <button
                                type="button"
                                class="notice__close"
                                aria-label="Закрыть"
                                on:click=move |_| vm.dismiss_acknowledgement()
                            >
                                "×"
                            </button>
                        </div>
                    </Show>

                    <Show when=move || vm.error.get().is_some()>
                        <div class="notice notice--error" role="alert">
                            {move || vm.error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form class="form" on:submit=on_submit>
                        <Input
                            id="contact-name"
                            label=ContactField::Name.label()
                            value=vm.field(ContactField::Name)
                            on_input=on_field(ContactField::Name)
                            placeholder="Иван Иванов"
                            autocomplete="name"
                            required=true
                        />
                        <Input
                            id="contact-email"
                            label=ContactField::Email.label()
                            input_type="email"
                            value=vm.field(ContactField::Email)
                            on_input=on_field(ContactField::Email)
                            placeholder="ivan@example.com"
                            autocomplete="email"
                            required=true
                        />
                        <Textarea
                            id="contact-message"
                            label=ContactField::Message.label()
                            value=vm.field(ContactField::Message)
                            on_input=on_field(ContactField::Message)
                            placeholder="Расскажите о вашем проекте..."
                            rows=5
                            required=true
                        />
                        <Button button_type="submit" size="lg" class="button--block">
                            "Отправить сообщение"
                            {icon_sized("send", 18)}
                        </Button>
                    </form>

                    <div class="contact-details">
                        <ContactLine icon_name="mail" text=config.contact.email.clone() />
                        <ContactLine icon_name="phone" text=config.contact.phone.clone() />
                        <ContactLine icon_name="map-pin" text=config.contact.address.clone() />
                    </div>
                </CardAnimated>
            </div>
        </section>
    }
}

#[component]
fn ContactLine(icon_name: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="contact-details__line">
            <span class="text-primary">{icon_sized(icon_name, 20)}</span>
            <span>{text}</span>
        </div>
    }
}

mod about;
mod hero;

use crate::domain::a001_project::ui::list::ProjectList;
use crate::domain::a002_service::ui::list::ServiceList;
use crate::layout::footer::FooterVariant;
use crate::layout::header::HeaderVariant;
use crate::layout::Shell;
use crate::shared::scroll::scroll_to_fragment;
use crate::usecases::u001_contact_request::ContactRequestForm;
use about::About;
use hero::Hero;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Главная страница. Фрагмент URL (`/#contact`) прокручивает к разделу.
#[component]
pub fn LandingPage() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let hash = location.hash.get();
        if !hash.is_empty() {
            if let Some(section) = scroll_to_fragment(&hash) {
                log::debug!("deep link to section {}", section.anchor());
            }
        }
    });

    view! {
        <Shell header=HeaderVariant::Landing footer=FooterVariant::Studio>
            <Hero />
            <ProjectList />
            <About />
            <ServiceList />
            <ContactRequestForm />
        </Shell>
    }
}

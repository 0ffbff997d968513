use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::section_header::SectionHeader;
use crate::shared::icons::icon_sized;
use contracts::domain::a002_service::SERVICES;
use contracts::enums::LandingSection;
use leptos::prelude::*;

/// Раздел «Услуги»
#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    view! {
        <section id=LandingSection::Services.anchor() class="section">
            <div class="container">
                <SectionHeader
                    title="Услуги"
                    subtitle="Комплексный подход к созданию архитектуры"
                />
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(idx, service)| view! {
                            <CardAnimated delay_ms=stagger_delay(idx) class="service-card card--hover">
                                <div class="service-card__icon">
                                    {icon_sized(service.icon, 32)}
                                </div>
                                <h4 class="service-card__title">{service.title}</h4>
                                <p class="service-card__description">{service.description}</p>
                            </CardAnimated>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

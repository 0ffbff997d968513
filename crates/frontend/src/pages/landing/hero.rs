use crate::shared::components::ui::button_class;
use crate::shared::config::use_site_config;
use crate::shared::scroll::scroll_to_anchor;
use contracts::enums::LandingSection;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let studio = use_site_config().studio;

    view! {
        <section class="hero">
            <div class="hero__glow"></div>
            <div class="container hero__content">
                <h2 class="hero__title text-gradient">{studio.headline}</h2>
                <p class="hero__tagline">{studio.tagline}</p>
                <div class="hero__actions">
                    <SectionLink
                        section=LandingSection::Portfolio
                        label="Посмотреть проекты"
                        variant="primary"
                    />
                    <SectionLink
                        section=LandingSection::Contact
                        label="Связаться"
                        variant="outline"
                    />
                </div>
            </div>
        </section>
    }
}

/// Ссылка-кнопка на раздел той же страницы
#[component]
fn SectionLink(section: LandingSection, label: &'static str, variant: &'static str) -> impl IntoView {
    let anchor = section.anchor();

    view! {
        <a
            href=section.href()
            class=button_class(Some(variant), Some("lg"), None)
            on:click=move |ev| {
                if scroll_to_anchor(anchor) {
                    ev.prevent_default();
                }
            }
        >
            {label}
        </a>
    }
}

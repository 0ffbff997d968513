use crate::shared::config::use_site_config;
use crate::shared::icons::icon_sized;
use crate::shared::scroll::scroll_to_anchor;
use contracts::enums::LandingSection;
use leptos::prelude::*;
use leptos_router::components::A;

/// Набор ссылок в шапке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Главная: якоря на разделы
    Landing,
    /// Страница проекта: возврат к портфолио
    Project,
}

#[component]
pub fn Header(variant: HeaderVariant) -> impl IntoView {
    let studio_name = use_site_config().studio.name;

    let nav = match variant {
        HeaderVariant::Landing => view! {
            <div class="site-header__nav">
                {LandingSection::all()
                    .into_iter()
                    .map(|section| {
                        let anchor = section.anchor();
                        view! {
                            <a
                                href=section.href()
                                class="site-header__link"
                                on:click=move |ev| {
                                    if scroll_to_anchor(anchor) {
                                        ev.prevent_default();
                                    }
                                }
                            >
                                {section.nav_label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        HeaderVariant::Project => view! {
            <A href=LandingSection::Portfolio.route() attr:class="button button--ghost button--sm">
                {icon_sized("arrow-left", 16)}
                <span>"К портфолио"</span>
            </A>
        }
        .into_any(),
    };

    view! {
        <nav data-zone="header" class="site-header">
            <div class="container site-header__content">
                <A href="/" attr:class="site-header__brand">
                    <span class="text-gradient">{studio_name}</span>
                </A>
                {nav}
            </div>
        </nav>
    }
}

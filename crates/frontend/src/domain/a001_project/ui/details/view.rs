use super::gallery::ProjectGallery;
use super::view_model::ProjectDetailsViewModel;
use crate::layout::footer::FooterVariant;
use crate::layout::header::HeaderVariant;
use crate::layout::Shell;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{button_class, CategoryBadge};
use crate::shared::config::use_site_config;
use crate::shared::icons::icon_sized;
use contracts::domain::a001_project::CatalogError;
use contracts::enums::LandingSection;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Страница проекта `/project/:id`.
///
/// Состояние галереи пересоздаётся при каждой смене параметра маршрута.
#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let raw_id = params.with(|p| p.get("id"));
        match ProjectDetailsViewModel::load(raw_id.as_deref()) {
            Ok(vm) => view! {
                <Shell header=HeaderVariant::Project footer=FooterVariant::Architect>
                    <ProjectDetails vm=vm />
                </Shell>
            }
            .into_any(),
            Err(error) => view! { <ProjectNotFound error=error /> }.into_any(),
        }
    }
}

#[component]
fn ProjectDetails(vm: ProjectDetailsViewModel) -> impl IntoView {
    let project = vm.project;
    let architect = use_site_config().architect;

    view! {
        <div class="project-page container container--wide">
            <header class="project-page__header">
                <CategoryBadge category=project.category />
                <h1 class="project-page__title">{project.title}</h1>
                <div class="project-page__meta">
                    <MetaItem icon_name="map-pin" text=project.location />
                    <MetaItem icon_name="calendar" text=project.year />
                    <MetaItem icon_name="maximize" text=project.area />
                </div>
            </header>

            <div class="project-page__top">
                <div class="project-page__gallery">
                    <ProjectGallery vm=vm />
                </div>

                <aside class="project-page__aside">
                    <CardAnimated>
                        <h3 class="card__title">"О проекте"</h3>
                        <dl class="facts">
                            <Fact label="Заказчик" value=project.client />
                            <Fact label="Площадь" value=project.area />
                            <Fact label="Год реализации" value=project.year />
                            <Fact label="Местоположение" value=project.location />
                        </dl>
                    </CardAnimated>

                    <CardAnimated delay_ms=100>
                        <h3 class="card__title">"Архитектор"</h3>
                        <p class="text-strong">{architect.name}</p>
                        <p class="text-muted">{architect.project_role}</p>
                    </CardAnimated>
                </aside>
            </div>

            <div class="project-page__body">
                <CardAnimated>
                    <h2 class="card__heading">"Описание"</h2>
                    <p class="text-muted text-relaxed">{project.description}</p>
                </CardAnimated>

                <CardAnimated>
                    <h2 class="card__heading">"Концепция"</h2>
                    <p class="text-muted text-relaxed">{project.concept}</p>
                </CardAnimated>

                <div class="project-page__lists">
                    <CardAnimated>
                        <h2 class="card__heading">"Материалы"</h2>
                        <BulletList items=project.materials icon_name="check-circle" accent="primary" />
                    </CardAnimated>

                    <CardAnimated>
                        <h2 class="card__heading">"Особенности"</h2>
                        <BulletList items=project.features icon_name="star" accent="secondary" />
                    </CardAnimated>
                </div>
            </div>

            <div class="project-page__cta">
                <A href=LandingSection::Contact.route() attr:class=button_class(None, Some("lg"), None)>
                    "Обсудить свой проект"
                    {icon_sized("arrow-right", 18)}
                </A>
            </div>
        </div>
    }
}

#[component]
fn MetaItem(icon_name: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="meta-item">
            {icon_sized(icon_name, 18)}
            <span>{text}</span>
        </div>
    }
}

#[component]
fn Fact(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="facts__row">
            <dt class="text-muted">{label}</dt>
            <dd class="text-strong">{value}</dd>
        </div>
    }
}

#[component]
fn BulletList(
    items: &'static [&'static str],
    icon_name: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {items
                .iter()
                .map(|item| view! {
                    <li class="bullet-list__item">
                        <span class=format!("bullet-list__icon text-{}", accent)>
                            {icon_sized(icon_name, 20)}
                        </span>
                        <span class="text-muted">{*item}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

/// Состояние «проект не найден» с возвратом на главную
#[component]
fn ProjectNotFound(error: CatalogError) -> impl IntoView {
    log::debug!("rendering not-found state: {}", error);

    view! {
        <div class="not-found">
            <div class="not-found__content">
                <h1 class="not-found__title">"Проект не найден"</h1>
                <A href="/" attr:class=button_class(None, None, None)>
                    "Вернуться на главную"
                </A>
            </div>
        </div>
    }
}

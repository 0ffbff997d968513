mod state;

pub use state::PortfolioState;

use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::section_header::SectionHeader;
use crate::shared::components::ui::{button_class, CategoryBadge};
use crate::shared::icons::icon_sized;
use contracts::domain::a001_project::ProjectRecord;
use contracts::enums::{CategoryFilter, LandingSection};
use leptos::prelude::*;
use leptos_router::components::A;

/// Раздел «Портфолио»: фильтр по категориям и сетка карточек
#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let state = PortfolioState::new();

    view! {
        <section id=LandingSection::Portfolio.anchor() class="section">
            <div class="container">
                <SectionHeader title="Портфолио" subtitle="Избранные проекты" />

                <div class="portfolio__filters" role="group" aria-label="Категории проектов">
                    {CategoryFilter::all()
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        let variant = if state.is_active(filter) { "primary" } else { "outline" };
                                        button_class(Some(variant), None, None)
                                    }
                                    aria-pressed=move || state.is_active(filter).to_string()
                                    on:click=move |_| state.select_filter(filter)
                                >
                                    {filter.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="portfolio__grid">
                    {move || {
                        let projects = state.visible_projects();
                        if projects.is_empty() {
                            return view! {
                                <p class="portfolio__empty">"В этой категории пока нет проектов"</p>
                            }
                            .into_any();
                        }
                        projects
                            .into_iter()
                            .enumerate()
                            .map(|(idx, project)| view! { <ProjectCard project=project index=idx /> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectRecord, index: usize) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="project-card card--hover">
            <A href=project.route() attr:class="project-card__link">
                <div class="project-card__media">
                    <img src=project.cover_image alt=project.title loading="lazy" />
                    <div class="project-card__overlay"></div>
                </div>
                <div class="project-card__body">
                    <CategoryBadge category=project.category />
                    <h4 class="project-card__title">{project.title}</h4>
                    <div class="project-card__meta">
                        <span class="meta-item">
                            {icon_sized("calendar", 16)}
                            {project.year}
                        </span>
                        <span class="meta-item">
                            {icon_sized("map-pin", 16)}
                            {project.location}
                        </span>
                    </div>
                </div>
            </A>
        </CardAnimated>
    }
}

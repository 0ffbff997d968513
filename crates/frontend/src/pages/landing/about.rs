use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::button_class;
use crate::shared::config::use_site_config;
use crate::shared::icons::icon;
use contracts::enums::LandingSection;
use leptos::prelude::*;

/// Раздел «Обо мне»: текст, ссылки на соцсети и показатели
#[component]
pub fn About() -> impl IntoView {
    let config = use_site_config();
    let social_class = button_class(Some("outline"), Some("icon"), None);

    view! {
        <section id=LandingSection::About.anchor() class="section section--tinted">
            <div class="container container--medium about">
                <div class="about__text">
                    <h3 class="section-header__title section-header__title--left">"Обо мне"</h3>
                    {config
                        .about
                        .paragraphs
                        .into_iter()
                        .map(|p| view! { <p class="text-muted text-relaxed">{p}</p> })
                        .collect_view()}
                    <div class="about__social">
                        {config
                            .social
                            .into_iter()
                            .map(|link| view! {
                                <a
                                    href=link.href
                                    class=social_class.clone()
                                    aria-label=link.label
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {icon(&link.icon)}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about__stats-wrap">
                    <div class="about__stats-glow"></div>
                    <div class="about__stats">
                        {config
                            .about
                            .stats
                            .into_iter()
                            .map(|stat| view! {
                                <StatCard value=stat.value label=stat.label accent=stat.accent />
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

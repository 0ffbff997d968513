use crate::shared::config::use_site_config;
use crate::shared::icons::icon_sized;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterVariant {
    /// Копирайт студии
    Studio,
    /// Карточка архитектора со ссылками для связи
    Architect,
}

#[component]
pub fn Footer(variant: FooterVariant) -> impl IntoView {
    let config = use_site_config();
    let year = config.copyright_year();

    match variant {
        FooterVariant::Studio => view! {
            <footer data-zone="footer" class="site-footer">
                <div class="container site-footer__content">
                    <p>{format!("© {} {}. Все права защищены.", year, config.studio.name)}</p>
                </div>
            </footer>
        }
        .into_any(),
        FooterVariant::Architect => {
            let architect = config.architect;
            view! {
                <footer data-zone="footer" class="site-footer site-footer--card">
                    <div class="container site-footer__content">
                        <h2 class="site-footer__name">{architect.name.clone()}</h2>
                        <p class="site-footer__role">{architect.role.clone()}</p>
                        <div class="site-footer__links">
                            <a href=format!("mailto:{}", architect.email) aria-label="Email">
                                {icon_sized("mail", 24)}
                            </a>
                            <a href=format!("tel:{}", architect.phone) aria-label="Телефон">
                                {icon_sized("phone", 24)}
                            </a>
                        </div>
                        <p class="site-footer__copyright">
                            {format!("© {} {}. Все права защищены.", year, architect.name)}
                        </p>
                    </div>
                </footer>
            }
            .into_any()
        }
    }
}

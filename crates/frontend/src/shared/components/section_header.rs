use leptos::prelude::*;

/// Заголовок раздела главной страницы
#[component]
pub fn SectionHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h3 class="section-header__title">{title}</h3>
            {move || subtitle.get().map(|s| view! {
                <p class="section-header__subtitle">{s}</p>
            })}
        </div>
    }
}

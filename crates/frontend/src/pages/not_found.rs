use crate::shared::components::ui::button_class;
use leptos::prelude::*;
use leptos_router::components::A;

/// Неизвестный маршрут
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found__content">
                <h1 class="not-found__title">"404"</h1>
                <p class="text-muted">"Страница не найдена"</p>
                <A href="/" attr:class=button_class(None, None, None)>
                    "Вернуться на главную"
                </A>
            </div>
        </div>
    }
}

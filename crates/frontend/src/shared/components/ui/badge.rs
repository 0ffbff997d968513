use contracts::enums::ProjectCategory;
use leptos::prelude::*;

/// Метка категории проекта на карточке и странице проекта
#[component]
pub fn CategoryBadge(category: ProjectCategory) -> impl IntoView {
    let class = format!("badge badge--{}", category.code());

    view! {
        <span class=class>
            {category.display_name()}
        </span>
    }
}

use leptos::prelude::*;

/// Показатель в разделе «Обо мне» («50+ реализованных проектов»)
#[component]
pub fn StatCard(
    value: String,
    label: String,
    /// "primary", "secondary" или "accent"
    #[prop(optional, into)]
    accent: String,
) -> impl IntoView {
    let value_class = match accent.as_str() {
        "secondary" => "stat-card__value stat-card__value--secondary",
        "accent" => "stat-card__value stat-card__value--accent",
        _ => "stat-card__value stat-card__value--primary",
    };

    view! {
        <div class="stat-card">
            <div class=value_class>{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}

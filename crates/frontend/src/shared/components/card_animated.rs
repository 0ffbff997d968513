//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `styles/site.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```rust,ignore
//! // Каскадная задержка для сетки карточек
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=100> // карточка 2
//! <CardAnimated delay_ms=200> // карточка 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками сетки, мс
pub const STAGGER_STEP_MS: u32 = 100;

/// Задержка появления `index`-й карточки
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
///
/// # Props
/// - `delay_ms` — задержка анимации в мс (по умолчанию `0`).
/// - `class`    — дополнительные CSS-классы карточки (`card--hover` и т.д.).
/// - `children` — содержимое карточки.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные CSS-классы.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.4s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "site-card".to_string()
    } else {
        format!("site-card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

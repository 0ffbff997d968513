//! Прокрутка к разделам главной страницы по якорю

use contracts::enums::LandingSection;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Плавно прокрутить к элементу с указанным `id`.
///
/// Возвращает `false`, если элемента нет в документе.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(anchor) else {
        log::debug!("scroll target #{} not found", anchor);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Прокрутить к разделу, названному во фрагменте URL
pub fn scroll_to_fragment(fragment: &str) -> Option<LandingSection> {
    let section = LandingSection::from_fragment(fragment)?;
    scroll_to_anchor(section.anchor()).then_some(section)
}

use crate::enums::ProjectCategory;
use serde::Serialize;

/// Проект из портфолио студии
///
/// Все поля ссылаются на данные со временем жизни `'static`:
/// каталог собирается на этапе компиляции и не изменяется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    /// Обложка для карточки в сетке портфолио
    pub cover_image: &'static str,
    pub year: &'static str,
    pub location: &'static str,
    pub client: &'static str,
    pub area: &'static str,
    pub description: &'static str,
    pub concept: &'static str,
    pub materials: &'static [&'static str],
    pub features: &'static [&'static str],
    /// Внешние ссылки на изображения (CDN), порядок важен
    pub gallery: &'static [&'static str],
}

impl ProjectRecord {
    /// Маршрут страницы проекта
    pub fn route(&self) -> String {
        format!("/project/{}", self.id)
    }

    /// Alt-текст для `index`-го изображения галереи (нумерация с 1)
    pub fn image_alt(&self, index: usize) -> String {
        format!("{} {}", self.title, index + 1)
    }
}

use serde::{Deserialize, Serialize};

/// Категория архитектурного проекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Residential,
    Commercial,
    Public,
}

impl ProjectCategory {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            ProjectCategory::Residential => "residential",
            ProjectCategory::Commercial => "commercial",
            ProjectCategory::Public => "public",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectCategory::Residential => "Жилые",
            ProjectCategory::Commercial => "Коммерческие",
            ProjectCategory::Public => "Общественные",
        }
    }

    /// Получить все категории
    pub fn all() -> Vec<ProjectCategory> {
        vec![
            ProjectCategory::Residential,
            ProjectCategory::Commercial,
            ProjectCategory::Public,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "residential" => Some(ProjectCategory::Residential),
            "commercial" => Some(ProjectCategory::Commercial),
            "public" => Some(ProjectCategory::Public),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Фильтр портфолио: все проекты либо одна категория.
///
/// `All` не является категорией, это значение только для отображения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub const ALL_CODE: &'static str = "all";

    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_CODE,
            CategoryFilter::Only(category) => category.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все проекты",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// Все значения фильтра в порядке кнопок на странице
    pub fn all() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::all().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == Self::ALL_CODE {
            return Some(CategoryFilter::All);
        }
        ProjectCategory::from_code(code).map(CategoryFilter::Only)
    }

    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_roundtrip() {
        for category in ProjectCategory::all() {
            assert_eq!(ProjectCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(ProjectCategory::from_code("industrial"), None);
        assert_eq!(ProjectCategory::from_code("all"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&ProjectCategory::Commercial).unwrap();
        assert_eq!(json, "\"commercial\"");
        let parsed: ProjectCategory = serde_json::from_str("\"public\"").unwrap();
        assert_eq!(parsed, ProjectCategory::Public);
    }

    #[test]
    fn test_filter_order_starts_with_wildcard() {
        let filters = CategoryFilter::all();
        assert_eq!(filters.len(), 4);
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters[1], CategoryFilter::Only(ProjectCategory::Residential));
        assert_eq!(filters[0].display_name(), "Все проекты");
    }

    #[test]
    fn test_filter_from_code() {
        assert_eq!(CategoryFilter::from_code("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_code("residential"),
            Some(CategoryFilter::Only(ProjectCategory::Residential))
        );
        assert_eq!(CategoryFilter::from_code("ALL"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(ProjectCategory::Public));
        assert!(CategoryFilter::Only(ProjectCategory::Public).matches(ProjectCategory::Public));
        assert!(!CategoryFilter::Only(ProjectCategory::Public).matches(ProjectCategory::Commercial));
    }
}

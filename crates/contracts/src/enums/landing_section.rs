/// Разделы главной страницы, доступные по якорю (`/#portfolio`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSection {
    Portfolio,
    About,
    Services,
    Contact,
}

impl LandingSection {
    /// Значение атрибута `id` и якоря в URL
    pub fn anchor(&self) -> &'static str {
        match self {
            LandingSection::Portfolio => "portfolio",
            LandingSection::About => "about",
            LandingSection::Services => "services",
            LandingSection::Contact => "contact",
        }
    }

    /// Подпись в навигации
    pub fn nav_label(&self) -> &'static str {
        match self {
            LandingSection::Portfolio => "Портфолио",
            LandingSection::About => "О себе",
            LandingSection::Services => "Услуги",
            LandingSection::Contact => "Контакты",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Ссылка на раздел с любой другой страницы
    pub fn route(&self) -> String {
        format!("/#{}", self.anchor())
    }

    pub fn all() -> Vec<LandingSection> {
        vec![
            LandingSection::Portfolio,
            LandingSection::About,
            LandingSection::Services,
            LandingSection::Contact,
        ]
    }

    /// Разбор фрагмента URL; ведущий `#` допускается
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let anchor = fragment.trim().trim_start_matches('#');
        Self::all().into_iter().find(|s| s.anchor() == anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment() {
        assert_eq!(
            LandingSection::from_fragment("#contact"),
            Some(LandingSection::Contact)
        );
        assert_eq!(
            LandingSection::from_fragment("portfolio"),
            Some(LandingSection::Portfolio)
        );
        assert_eq!(LandingSection::from_fragment(""), None);
        assert_eq!(LandingSection::from_fragment("#footer"), None);
    }

    #[test]
    fn test_links() {
        assert_eq!(LandingSection::About.href(), "#about");
        assert_eq!(LandingSection::Contact.route(), "/#contact");
    }
}

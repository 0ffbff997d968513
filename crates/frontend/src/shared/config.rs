//! Конфигурация сайта
//!
//! Тексты и контакты читаются из `site.toml`, встроенного в wasm при сборке.
//! Если файл не разобрался, используются значения по умолчанию.

use chrono::Datelike;
use leptos::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Встроенный `site.toml`
const EMBEDDED_CONFIG: &str = include_str!("../../site.toml");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub studio: StudioConfig,
    pub contact: ContactConfig,
    pub architect: ArchitectConfig,
    #[serde(default)]
    pub about: AboutConfig,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StudioConfig {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub copyright_year: Option<i32>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ArchitectConfig {
    pub name: String,
    pub role: String,
    pub project_role: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AboutConfig {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<StatConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatConfig {
    pub value: String,
    pub label: String,
    /// "primary", "secondary" или "accent"
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "primary".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormConfig {
    /// Через сколько миллисекунд скрыть подтверждение отправки
    pub ack_timeout_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            ack_timeout_ms: 6000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            studio: StudioConfig {
                name: "АрхДизайн".to_string(),
                headline: "Создаю пространства будущего".to_string(),
                tagline: "Современная архитектура с акцентом на функциональность и эстетику"
                    .to_string(),
                copyright_year: None,
            },
            contact: ContactConfig {
                email: "info@archdesign.ru".to_string(),
                phone: "+7 (999) 123-45-67".to_string(),
                address: "Москва, Россия".to_string(),
            },
            architect: ArchitectConfig {
                name: "Александр Орлов".to_string(),
                role: "Архитектор".to_string(),
                project_role: "Главный архитектор проекта".to_string(),
                email: "orlov@example.com".to_string(),
                phone: "+79001234567".to_string(),
            },
            about: AboutConfig::default(),
            social: Vec::new(),
            form: FormConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Год для строки копирайта: из конфигурации или текущий
    pub fn copyright_year(&self) -> i32 {
        self.studio
            .copyright_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }

    /// Уровень логирования; нераспознанное значение даёт `Debug`
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Разобрать конфигурацию из TOML
pub fn load_config(contents: &str) -> Result<SiteConfig, toml::de::Error> {
    toml::from_str(contents)
}

static SITE_CONFIG: Lazy<Result<SiteConfig, String>> =
    Lazy::new(|| load_config(EMBEDDED_CONFIG).map_err(|e| e.to_string()));

static FALLBACK_CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::default);

/// Конфигурация сайта (встроенная или запасная)
pub fn site_config() -> &'static SiteConfig {
    match &*SITE_CONFIG {
        Ok(config) => config,
        Err(_) => Lazy::force(&FALLBACK_CONFIG),
    }
}

/// Ошибка разбора встроенного `site.toml`, если была
pub fn config_error() -> Option<&'static str> {
    (*SITE_CONFIG).as_ref().err().map(String::as_str)
}

/// Конфигурация из контекста приложения
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_else(|| site_config().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = load_config(EMBEDDED_CONFIG);
        assert!(config.is_ok(), "{:?}", config.err());
        let config = config.unwrap();
        assert_eq!(config.studio.name, "АрхДизайн");
        assert_eq!(config.about.stats.len(), 4);
        assert_eq!(config.social.len(), 3);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.copyright_year(), 2024);
        assert!(config_error().is_none());
    }

    #[test]
    fn test_optional_sections_default() {
        let minimal = r#"
[studio]
name = "Studio"
headline = "h"
tagline = "t"
copyright_year = 2024

[contact]
email = "a@b.c"
phone = "1"
address = "x"

[architect]
name = "n"
role = "r"
project_role = "p"
email = "e"
phone = "p"
"#;
        let config = load_config(minimal).unwrap();
        assert_eq!(config.form.ack_timeout_ms, 6000);
        assert!(config.social.is_empty());
        assert!(config.about.stats.is_empty());
        assert_eq!(config.copyright_year(), 2024);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(load_config("[studio]\nname = 1").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = SiteConfig::default();
        config.logging.level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.logging.level = "verbose".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}

use serde::Serialize;

/// Услуга студии для раздела «Услуги»
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    /// Имя иконки для `shared::icons::icon` во фронтенде
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        icon: "building",
        title: "Архитектурное проектирование",
        description: "Разработка концепций и рабочих проектов жилых и коммерческих зданий",
    },
    ServiceOffering {
        icon: "lightbulb",
        title: "Дизайн интерьеров",
        description: "Создание уникальных интерьерных решений для частных и общественных пространств",
    },
    ServiceOffering {
        icon: "file-check",
        title: "Авторский надзор",
        description: "Контроль качества строительных работ и соблюдения проектной документации",
    },
    ServiceOffering {
        icon: "ruler",
        title: "3D визуализация",
        description: "Фотореалистичные визуализации проектов для презентации заказчикам",
    },
];

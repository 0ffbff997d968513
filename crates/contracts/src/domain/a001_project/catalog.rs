//! Каталог проектов студии
//!
//! Каталог задан статическим срезом и живёт всё время работы приложения.
//! Фильтрация и поиск не имеют побочных эффектов.

use super::aggregate::ProjectRecord;
use crate::enums::{CategoryFilter, ProjectCategory};
use thiserror::Error;

const IMAGE_VILLA: &str = "https://cdn.poehali.dev/projects/6f9d9dc9-2132-46d2-94bd-65f1f2142b43/files/be29146d-92d3-49c7-b937-89bc7bbd15a6.jpg";
const IMAGE_HORIZON: &str = "https://cdn.poehali.dev/projects/6f9d9dc9-2132-46d2-94bd-65f1f2142b43/files/39461170-d51c-4bb7-82ef-2ba66d2925cf.jpg";
const IMAGE_CULTURE: &str = "https://cdn.poehali.dev/projects/6f9d9dc9-2132-46d2-94bd-65f1f2142b43/files/56946ea0-7a7b-4282-b8ed-3ba265786edc.jpg";

/// Все проекты в порядке отображения
pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "Вилла на побережье",
        category: ProjectCategory::Residential,
        cover_image: IMAGE_VILLA,
        year: "2024",
        location: "Сочи",
        client: "Частный заказчик",
        area: "450 м²",
        description: "Загородная резиденция на склоне над морем. Дом раскрывается к воде \
            панорамным остеклением, а террасы спускаются по рельефу к бассейну.",
        concept: "Архитектура продолжает ландшафт: горизонтальные плиты перекрытий повторяют \
            линии террас, а глубокие консоли защищают интерьеры от южного солнца.",
        materials: &[
            "Монолитный железобетон",
            "Структурное остекление",
            "Термообработанная лиственница",
            "Местный известняк",
        ],
        features: &[
            "Панорамный вид на море из всех жилых помещений",
            "Бассейн-инфинити на нижней террасе",
            "Геотермальное отопление",
            "Система «умный дом»",
        ],
        gallery: &[IMAGE_VILLA, IMAGE_CULTURE, IMAGE_HORIZON],
    },
    ProjectRecord {
        id: 2,
        title: "Бизнес-центр «Горизонт»",
        category: ProjectCategory::Commercial,
        cover_image: IMAGE_HORIZON,
        year: "2023",
        location: "Москва",
        client: "ООО «Горизонт Девелопмент»",
        area: "32 000 м²",
        description: "Офисный комплекс класса A с общественным атриумом на первом этаже. \
            Гибкая сетка колонн позволяет арендаторам свободно планировать пространство.",
        concept: "Здание задумано как вертикальный город: атриум связывает уровни, \
            а озеленённые террасы на кровле работают как общественные площадки.",
        materials: &[
            "Стальной каркас",
            "Двойной вентилируемый фасад",
            "Алюминиевые ламели",
            "Полированный бетон",
        ],
        features: &[
            "Сертификация LEED Gold",
            "Атриум высотой 6 этажей",
            "Эксплуатируемая кровля с зелёными зонами",
            "Подземный паркинг на 400 мест",
        ],
        gallery: &[IMAGE_HORIZON, IMAGE_VILLA, IMAGE_CULTURE],
    },
    ProjectRecord {
        id: 3,
        title: "Культурный центр",
        category: ProjectCategory::Public,
        cover_image: IMAGE_CULTURE,
        year: "2023",
        location: "Санкт-Петербург",
        client: "Администрация Санкт-Петербурга",
        area: "12 500 м²",
        description: "Многофункциональный центр с концертным залом, библиотекой и \
            выставочными пространствами на месте бывшей промышленной территории.",
        concept: "Открытая площадь перед зданием продолжается внутри фойе, стирая \
            границу между улицей и культурной жизнью района.",
        materials: &[
            "Клинкерный кирпич",
            "Перфорированная медь",
            "Клеёная деревянная балка",
            "Натуральный гранит",
        ],
        features: &[
            "Концертный зал на 800 мест с регулируемой акустикой",
            "Библиотека с круглосуточным читальным залом",
            "Кровля-амфитеатр для летних мероприятий",
            "Полная доступность для маломобильных посетителей",
        ],
        gallery: &[IMAGE_CULTURE, IMAGE_HORIZON, IMAGE_VILLA],
    },
];

/// Ошибка поиска проекта в каталоге
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Некорректный идентификатор проекта: {0:?}")]
    InvalidId(String),

    #[error("Проект {0} не найден")]
    NotFound(u32),
}

/// Проекты выбранной категории в исходном порядке каталога.
///
/// `CategoryFilter::All` возвращает каталог целиком.
pub fn filter_projects(catalog: &[ProjectRecord], filter: CategoryFilter) -> Vec<&ProjectRecord> {
    catalog.iter().filter(|p| filter.matches(p.category)).collect()
}

/// Фильтрация по строковому коду категории.
///
/// Неизвестный код даёт пустой результат, а не ошибку.
pub fn filter_projects_by_code<'a>(catalog: &'a [ProjectRecord], code: &str) -> Vec<&'a ProjectRecord> {
    match CategoryFilter::from_code(code) {
        Some(filter) => filter_projects(catalog, filter),
        None => Vec::new(),
    }
}

/// Первый проект с указанным `id`
pub fn find_project(catalog: &[ProjectRecord], id: u32) -> Option<&ProjectRecord> {
    catalog.iter().find(|p| p.id == id)
}

/// Разбор идентификатора из параметра маршрута
pub fn parse_project_id(raw: &str) -> Result<u32, CatalogError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| CatalogError::InvalidId(raw.to_string()))
}

/// Поиск по сырому параметру маршрута (`/project/:id`)
pub fn lookup_project<'a>(
    catalog: &'a [ProjectRecord],
    raw: &str,
) -> Result<&'a ProjectRecord, CatalogError> {
    let id = parse_project_id(raw)?;
    find_project(catalog, id).ok_or(CatalogError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(records: &[&ProjectRecord]) -> Vec<u32> {
        records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_ids_are_unique() {
        let unique: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), PROJECTS.len());
    }

    #[test]
    fn test_every_project_has_gallery_starting_with_cover() {
        for project in PROJECTS {
            assert!(!project.gallery.is_empty(), "project {} has no images", project.id);
            assert_eq!(project.gallery[0], project.cover_image);
        }
    }

    #[test]
    fn test_filter_by_category_keeps_order_and_category() {
        for category in ProjectCategory::all() {
            let result = filter_projects(PROJECTS, CategoryFilter::Only(category));
            assert!(result.iter().all(|p| p.category == category));

            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&result), expected);
        }
    }

    #[test]
    fn test_filter_all_returns_full_catalog() {
        let result = filter_projects(PROJECTS, CategoryFilter::All);
        assert_eq!(result.len(), PROJECTS.len());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_commercial_yields_project_2() {
        let result = filter_projects(PROJECTS, CategoryFilter::Only(ProjectCategory::Commercial));
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let catalog = [
            ProjectRecord { id: 10, ..PROJECTS[0].clone() },
            ProjectRecord { id: 11, ..PROJECTS[1].clone() },
            ProjectRecord { id: 12, ..PROJECTS[0].clone() },
        ];
        let result = filter_projects(&catalog, CategoryFilter::Only(ProjectCategory::Residential));
        assert_eq!(ids(&result), vec![10, 12]);
    }

    #[test]
    fn test_filter_by_unknown_code_is_empty() {
        assert!(filter_projects_by_code(PROJECTS, "industrial").is_empty());
        assert!(filter_projects_by_code(PROJECTS, "").is_empty());
        assert_eq!(ids(&filter_projects_by_code(PROJECTS, "public")), vec![3]);
        assert_eq!(filter_projects_by_code(PROJECTS, "all").len(), PROJECTS.len());
    }

    #[test]
    fn test_find_every_known_id() {
        for project in PROJECTS {
            let found = find_project(PROJECTS, project.id);
            assert_eq!(found, Some(project));
        }
        assert_eq!(find_project(PROJECTS, 99), None);
    }

    #[test]
    fn test_lookup_parses_route_param() {
        let project = lookup_project(PROJECTS, "2").unwrap();
        assert_eq!(project.title, "Бизнес-центр «Горизонт»");
        assert_eq!(lookup_project(PROJECTS, " 3 ").unwrap().id, 3);
    }

    #[test]
    fn test_lookup_miss_and_malformed_input() {
        assert_eq!(lookup_project(PROJECTS, "42"), Err(CatalogError::NotFound(42)));
        assert_eq!(lookup_project(PROJECTS, "0"), Err(CatalogError::NotFound(0)));
        assert_eq!(
            lookup_project(PROJECTS, "villa"),
            Err(CatalogError::InvalidId("villa".to_string()))
        );
        assert!(matches!(lookup_project(PROJECTS, ""), Err(CatalogError::InvalidId(_))));
        assert!(matches!(lookup_project(PROJECTS, "-1"), Err(CatalogError::InvalidId(_))));
        assert!(matches!(
            lookup_project(PROJECTS, "99999999999"),
            Err(CatalogError::InvalidId(_))
        ));
    }

    #[test]
    fn test_lookup_accepts_plain_decimal_only() {
        for raw in ["2.0", "2e0", "0x2", "+-2", "2 3"] {
            assert_eq!(
                lookup_project(PROJECTS, raw),
                Err(CatalogError::InvalidId(raw.to_string())),
                "{raw:?}"
            );
        }
        assert_eq!(lookup_project(PROJECTS, "02").unwrap().id, 2);
        assert_eq!(lookup_project(PROJECTS, "+2").unwrap().id, 2);
    }

    #[test]
    fn test_route_and_alt() {
        assert_eq!(PROJECTS[0].route(), "/project/1");
        assert_eq!(PROJECTS[2].image_alt(0), "Культурный центр 1");
    }
}

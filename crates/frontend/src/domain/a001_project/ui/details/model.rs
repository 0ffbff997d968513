use contracts::domain::a001_project::{lookup_project, CatalogError, ProjectRecord, PROJECTS};

/// Найти проект по сырому параметру `:id`.
///
/// Промах не фатален: страница показывает состояние «не найден».
pub fn fetch_by_route_param(raw: Option<&str>) -> Result<&'static ProjectRecord, CatalogError> {
    let raw = raw.unwrap_or_default();
    lookup_project(PROJECTS, raw).inspect_err(|e| log::warn!("project lookup failed: {}", e))
}

use contracts::domain::a001_project::{filter_projects, ProjectRecord, PROJECTS};
use contracts::enums::CategoryFilter;
use leptos::prelude::*;

/// Состояние сетки портфолио. Живёт, пока открыта главная страница.
#[derive(Clone, Copy)]
pub struct PortfolioState {
    pub filter: RwSignal<CategoryFilter>,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self {
            filter: RwSignal::new(CategoryFilter::default()),
        }
    }

    pub fn select_filter(&self, filter: CategoryFilter) {
        if self.filter.get_untracked() != filter {
            log::debug!("portfolio filter: {}", filter.code());
            self.filter.set(filter);
        }
    }

    pub fn is_active(&self, filter: CategoryFilter) -> bool {
        self.filter.get() == filter
    }

    pub fn visible_projects(&self) -> Vec<&'static ProjectRecord> {
        filter_projects(PROJECTS, self.filter.get())
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

use super::model;
use contracts::domain::a001_project::{CatalogError, ProjectRecord};
use contracts::shared::GallerySelector;
use leptos::prelude::*;

/// ViewModel страницы проекта
#[derive(Clone, Copy)]
pub struct ProjectDetailsViewModel {
    pub project: &'static ProjectRecord,
    pub gallery: RwSignal<GallerySelector>,
}

impl ProjectDetailsViewModel {
    pub fn new(project: &'static ProjectRecord) -> Self {
        Self {
            project,
            gallery: RwSignal::new(GallerySelector::new(project.gallery.len())),
        }
    }

    /// ViewModel для параметра маршрута; ошибка означает «не найден»
    pub fn load(raw_id: Option<&str>) -> Result<Self, CatalogError> {
        model::fetch_by_route_param(raw_id).map(Self::new)
    }

    /// Текущее изображение; при пустой галерее — обложка
    pub fn current_image(&self) -> &'static str {
        let project = self.project;
        self.gallery
            .get()
            .current(project.gallery)
            .copied()
            .unwrap_or(project.cover_image)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.gallery.get().is_selected(index)
    }

    pub fn select_image(&self, index: usize) {
        self.gallery.update(|g| {
            if let Err(e) = g.select(index) {
                log::warn!("gallery of project {}: {}", self.project.id, e);
            }
        });
    }

    pub fn next_image(&self) {
        self.gallery.update(|g| g.next());
    }

    pub fn previous_image(&self) {
        self.gallery.update(|g| g.previous());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_project::PROJECTS;

    #[test]
    fn test_empty_gallery_shows_cover() {
        let owner = Owner::new();
        owner.set();

        let project: &'static ProjectRecord = Box::leak(Box::new(ProjectRecord {
            gallery: &[],
            ..PROJECTS[0].clone()
        }));
        let vm = ProjectDetailsViewModel::new(project);
        assert_eq!(vm.current_image(), project.cover_image);

        vm.select_image(0);
        assert_eq!(vm.current_image(), project.cover_image);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let owner = Owner::new();
        owner.set();

        let vm = ProjectDetailsViewModel::new(&PROJECTS[0]);
        assert!(vm.is_selected(0));
        assert_eq!(vm.current_image(), PROJECTS[0].gallery[0]);

        vm.select_image(2);
        vm.select_image(7);
        assert!(vm.is_selected(2));
        assert_eq!(vm.current_image(), PROJECTS[0].gallery[2]);

        vm.next_image();
        assert!(vm.is_selected(0));
        vm.previous_image();
        assert!(vm.is_selected(2));
    }

    #[test]
    fn test_load_by_route_param() {
        let owner = Owner::new();
        owner.set();

        let vm = ProjectDetailsViewModel::load(Some("3")).unwrap();
        assert_eq!(vm.project.id, 3);
        assert!(vm.is_selected(0));

        assert!(matches!(
            ProjectDetailsViewModel::load(None),
            Err(CatalogError::InvalidId(_))
        ));
        assert!(matches!(
            ProjectDetailsViewModel::load(Some("42")),
            Err(CatalogError::NotFound(42))
        ));
    }
}

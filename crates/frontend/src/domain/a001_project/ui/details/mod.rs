//! Project Details UI Module
//!
//! - model.rs: поиск проекта в каталоге по параметру маршрута
//! - view_model.rs: выбранный проект и состояние галереи
//! - view.rs: страница проекта и состояние «не найден»
//! - gallery.rs: галерея изображений

mod gallery;
mod model;
mod view;
mod view_model;

pub use gallery::ProjectGallery;
pub use view::ProjectDetailPage;
pub use view_model::ProjectDetailsViewModel;

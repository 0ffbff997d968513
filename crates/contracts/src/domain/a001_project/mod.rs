pub mod aggregate;
pub mod catalog;

pub use aggregate::ProjectRecord;
pub use catalog::{
    filter_projects, filter_projects_by_code, find_project, lookup_project, parse_project_id,
    CatalogError, PROJECTS,
};

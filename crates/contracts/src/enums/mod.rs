pub mod landing_section;
pub mod project_category;

pub use landing_section::LandingSection;
pub use project_category::{CategoryFilter, ProjectCategory};

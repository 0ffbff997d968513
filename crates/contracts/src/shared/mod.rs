pub mod gallery;

pub use gallery::{GalleryError, GallerySelector};

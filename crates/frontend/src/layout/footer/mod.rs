pub mod footer;

pub use footer::{Footer, FooterVariant};

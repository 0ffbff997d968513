pub mod aggregate;

pub use aggregate::{ServiceOffering, SERVICES};

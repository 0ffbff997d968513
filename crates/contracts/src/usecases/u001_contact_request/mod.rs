pub mod channel;
pub mod form;
pub mod request;
pub mod response;

pub use channel::{ContactChannel, LocalAcknowledgement};
pub use form::{ContactForm, ContactFormError};
pub use request::{ContactField, ContactRequest};
pub use response::ContactAcknowledgement;

mod view;
mod view_model;

pub use view::ContactRequestForm;
pub use view_model::ContactRequestViewModel;

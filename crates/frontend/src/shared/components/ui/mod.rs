pub mod badge;
pub mod button;
pub mod input;
pub mod textarea;

pub use badge::CategoryBadge;
pub use button::{button_class, Button};
pub use input::Input;
pub use textarea::Textarea;

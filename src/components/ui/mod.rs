pub mod alert;
pub mod button;
pub mod card;
pub mod input;
pub mod native_select;
pub mod spinner;
pub mod toast;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use native_select::*;
pub use spinner::*;
pub use toast::*;

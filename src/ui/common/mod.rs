//! Small components shared by several page sections

pub mod cart_button;
pub mod theme_toggle;

pub use cart_button::CartButton;
pub use theme_toggle::ThemeToggle;

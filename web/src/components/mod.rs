//! Application components.
pub mod layout;
pub mod nav_bar;
pub mod splash;
pub mod theme_toggle;

// Re-exports
pub use layout::Layout;
pub use nav_bar::NavBar;
pub use splash::Splash;
pub use theme_toggle::ThemeToggle;

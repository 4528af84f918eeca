//! Custom hooks.
pub mod contact_form;
pub mod navigate;
pub mod role_cycle;
pub mod splash;
pub mod theme;

// Re-exports
pub use contact_form::{use_contact_form, ContactFormAction, ContactFormReducer};
pub use navigate::use_navigate_to;
pub use role_cycle::use_role_cycle;
pub use splash::use_splash;
pub use theme::{use_document_theme, use_theme, use_theme_store};

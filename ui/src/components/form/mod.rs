//! Form components.
pub mod text_area;
pub mod text_field;

// Re-exports
pub use text_area::TextArea;
pub use text_field::TextField;

/// Html id of a field's error message.
pub(crate) fn error_id(name: &str) -> String {
    format!("{name}-error")
}

//! UI Components
pub mod card;
pub mod form;
pub mod icon_link;
pub mod messages;

// Re-exports
pub use card::{Card, CardUi};
pub use icon_link::IconLink;
pub use messages::Message;

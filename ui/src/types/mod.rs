pub mod message;

// Re-exports
pub use message::MessageType;

//! Message displayed to the user.

/// Message types.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageType {
    /// Informational message.
    Info,

    /// Success message.
    Success,

    /// Error message.
    Error,
}

impl MessageType {
    /// CSS class of the message type.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Info => "message-info",
            Self::Success => "message-success",
            Self::Error => "message-error",
        }
    }
}

#[cfg(test)]
#[path = "./message_test.rs"]
mod message_test;

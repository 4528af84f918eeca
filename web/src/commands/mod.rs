//! Calls to external services.
pub mod contact;

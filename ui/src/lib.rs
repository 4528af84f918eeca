//! # Portfolio UI
//!
//! Reusable components for the portfolio site.
pub mod components;
pub mod types;

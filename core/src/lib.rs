//! # Portfolio Core
//!
//! UI independent logic of the portfolio site:
//! theme persistence, the splash screen lifecycle, page navigation,
//! contact form validation and the static site content.
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod navigation;
pub mod splash;
pub mod theme;

#[cfg(test)]
#[path = "./lib_test.rs"]
mod lib_test;

// Re-exports
pub use config::SiteConfig;
pub use error::{Error, Result};

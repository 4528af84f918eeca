//! User interface of the portfolio site.
mod app;
pub mod commands;
mod components;
pub mod constants;
pub mod error;
mod hooks;
mod pages;
pub mod routes;
pub mod storage;
pub mod timers;

pub use app::App;
pub use error::{Error, Result};

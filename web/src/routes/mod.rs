//! Route functionalty.
pub mod routes;

// Re-exports
pub use routes::{switch, Route};

//! Common error types.
use std::result::Result as StdResult;
use thiserror::Error;

// *************
// *** Error ***
// *************

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Theme persistence failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Page identifier or path is not recognized.
    #[error("unknown page `{0}`")]
    UnknownPage(String),

    /// Persisted theme value is neither `dark` nor `light`.
    #[error("invalid theme `{0}`")]
    InvalidTheme(String),
}

impl Error {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;

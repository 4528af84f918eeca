//! Result and Errors.
use portfolio_core::Error as CoreError;
use std::result::Result as StdResult;
use wasm_bindgen::JsValue;

/// Errors
#[derive(Debug)]
pub enum Error {
    /// Call into the browser failed.
    Binding(String),

    /// Request completed with an unsuccessful status.
    Request(u16),
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        Self::Binding(format!("{:?}", err))
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        CoreError::storage(format!("{err:?}"))
    }
}

// **************
// *** result ***
// **************

/// Crate result.
pub type Result<T = ()> = StdResult<T, Error>;

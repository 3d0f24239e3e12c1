//! Some common error types.

use std::string::FromUtf8Error;

use crate::{http::StatusCode, IntoResponse, Response};

/// A possible error value when registering a route.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The path is empty or does not begin with `/`.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// The reason why a request could not be routed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum DispatchError {
    /// No route matches the path under any method.
    #[error("not found")]
    NotFound,

    /// The path matches a route registered under a different method.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl DispatchError {
    /// Returns the status code for this error.
    #[inline]
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::NotFound => StatusCode::NOT_FOUND,
            DispatchError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        self.status().into()
    }
}

/// A possible error value when reading the body.
#[derive(Debug, thiserror::Error)]
pub enum ReadBodyError {
    /// Body is not a valid utf8 string.
    #[error("parse utf8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Io error.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

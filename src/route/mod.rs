//! Route object and DSL

mod node;
mod params;
mod router;

pub use params::Params;
pub use router::{Matched, Router};

use crate::error::RouteError;

pub(crate) fn check_result<T>(res: Result<T, RouteError>) -> T {
    match res {
        Ok(value) => value,
        Err(RouteError::InvalidPath(path)) => panic!("invalid path: {}", path),
    }
}

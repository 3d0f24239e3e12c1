//! Endpoint related types.

#[allow(clippy::module_inception)]
mod endpoint;
mod map_to_response;

pub use endpoint::{make, make_sync, BoxEndpoint, Endpoint, EndpointExt};
pub use map_to_response::MapToResponse;

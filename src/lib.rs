//! A request router built on a segment trie, one trie per HTTP method.
//!
//! Paths are split on `/` and stored in a prefix tree. A segment starting with
//! `:` declares a path parameter that captures exactly one segment. A request
//! that matches no route answers `404 Not Found`, a request whose path is only
//! registered under another method answers `405 Method Not Allowed`.
//!
//! # Example
//!
//! ```no_run
//! use trie_router::{endpoint::make_sync, http::StatusCode, middleware::Tracing, EndpointExt, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .get("/", make_sync(|_| "Index"))
//!         .get("/pings", make_sync(|_| "Pong!"))
//!         .post("/pings/:id", make_sync(|req| {
//!             (StatusCode::CREATED, format!("created {}", req.params().get("id").unwrap()))
//!         }))
//!         .with(Tracing);
//!
//!     Server::bind(([127, 0, 0, 1], 3000))
//!         .unwrap()
//!         .run(app)
//!         .await
//!         .unwrap();
//! }
//! ```
//!
//! # Matching rules
//!
//! - At every segment an exact literal child wins over a parameter child.
//! - Matching never backtracks: once a segment selects a child, the
//!   remaining segments must match below it.
//! - Empty segments (`//`) and trailing slashes are significant, `/articles/`
//!   and `/articles` are different routes.
//! - Only the path is matched, the query string is ignored.
//! - Each segment is percent-decoded after the path is split, so `%2F` stays
//!   inside its segment. Segments that do not decode to UTF-8 are matched raw.

#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod endpoint;
pub mod error;
pub mod middleware;
pub mod route;

#[doc(inline)]
pub use http;

mod body;
mod request;
mod response;
mod server;

pub use async_trait::async_trait;
pub use body::Body;
pub use endpoint::{Endpoint, EndpointExt};
pub use error::{DispatchError, RouteError};
pub use middleware::Middleware;
pub use request::{Request, RequestBuilder};
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use route::{Params, Router};
pub use server::Server;

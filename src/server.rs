use std::{convert::Infallible, future::Future, net::SocketAddr, sync::Arc};

use hyper::{
    server::conn::AddrIncoming,
    service::{make_service_fn, service_fn},
};

use crate::{Endpoint, IntoResponse, Request};

/// An HTTP Server.
///
/// # Example
///
/// ```no_run
/// use trie_router::{endpoint::make_sync, Router, Server};
///
/// #[tokio::main]
/// async fn main() {
///     let app = Router::new().get("/ping", make_sync(|_| "Pong!"));
///     Server::bind(([127, 0, 0, 1], 3000))
///         .unwrap()
///         .run(app)
///         .await
///         .unwrap();
/// }
/// ```
pub struct Server {
    incoming: AddrIncoming,
}

impl Server {
    /// Binds a listener on `addr`.
    ///
    /// Must be called within a tokio runtime.
    pub fn bind(addr: impl Into<SocketAddr>) -> Result<Self, hyper::Error> {
        Ok(Self {
            incoming: AddrIncoming::bind(&addr.into())?,
        })
    }

    /// Returns the address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.incoming.local_addr()
    }

    /// Run this server.
    pub async fn run(self, ep: impl Endpoint + 'static) -> Result<(), hyper::Error> {
        self.run_with_graceful_shutdown(ep, std::future::pending())
            .await
    }

    /// Run this server, and stop accepting connections once `signal`
    /// resolves. In-flight requests are completed before returning.
    pub async fn run_with_graceful_shutdown(
        self,
        ep: impl Endpoint + 'static,
        signal: impl Future<Output = ()>,
    ) -> Result<(), hyper::Error> {
        let ep = Arc::new(ep);
        let service = make_service_fn(move |_| {
            let ep = ep.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req: hyper::Request<hyper::Body>| {
                    let ep = ep.clone();
                    async move {
                        let resp = ep
                            .call(Request::from_hyper_request(req))
                            .await
                            .into_response();
                        Ok::<_, Infallible>(resp.into_hyper_response())
                    }
                }))
            }
        });

        let addr = self.local_addr();
        tracing::info!(addr = %addr, "listening");
        hyper::Server::builder(self.incoming)
            .serve(service)
            .with_graceful_shutdown(signal)
            .await?;
        tracing::info!(addr = %addr, "server stopped");
        Ok(())
    }
}

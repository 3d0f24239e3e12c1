use fnv::FnvHashMap;

use super::{check_result, node::Node, Params};
use crate::{
    endpoint::BoxEndpoint, error::DispatchError, http::Method, Endpoint, EndpointExt,
    IntoResponse, Request, Response,
};

/// The result of a successful [`Router::lookup`].
pub struct Matched<'a> {
    /// The endpoint registered for the route.
    pub endpoint: &'a BoxEndpoint<'static, Response>,
    /// The path parameters in the order they appear in the path.
    pub params: Params,
}

/// Routing object
///
/// Keeps one segment trie per HTTP method. Routes are registered while
/// building the router, after that it is only read.
///
/// # Errors
///
/// A request that matches no route answers `404 Not Found`. If the path is
/// registered under another method the answer is `405 Method Not Allowed`.
///
/// # Example
///
/// ```
/// use trie_router::{
///     endpoint::make_sync,
///     http::{Method, StatusCode, Uri},
///     Endpoint, Request, Router,
/// };
///
/// let app = Router::new()
///     .get("/pings", make_sync(|_| "Pong!"))
///     .post(
///         "/pings/:id",
///         make_sync(|req| (StatusCode::CREATED, req.params().get("id").unwrap().to_string())),
///     );
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let resp = app
///     .call(
///         Request::builder()
///             .method(Method::POST)
///             .uri(Uri::from_static("/pings/1"))
///             .finish(),
///     )
///     .await;
/// assert_eq!(resp.status(), StatusCode::CREATED);
/// assert_eq!(resp.into_body().into_string().await.unwrap(), "1");
///
/// let resp = app
///     .call(
///         Request::builder()
///             .method(Method::POST)
///             .uri(Uri::from_static("/pings"))
///             .finish(),
///     )
///     .await;
/// assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
/// # });
/// ```
pub struct Router {
    routes: FnvHashMap<Method, Node<BoxEndpoint<'static, Response>>>,
    handle_method_not_allowed: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            routes: FnvHashMap::default(),
            handle_method_not_allowed: true,
        }
    }
}

impl Router {
    /// Create a new routing object.
    pub fn new() -> Self {
        Default::default()
    }

    /// If enabled, a request that matches no route for its method is checked
    /// against the routes of the other methods and answered with
    /// `405 Method Not Allowed` when one of them matches. Otherwise every
    /// miss is answered with `404 Not Found`.
    ///
    /// Enabled by default.
    #[must_use]
    pub fn handle_method_not_allowed(self, enable: bool) -> Self {
        Self {
            handle_method_not_allowed: enable,
            ..self
        }
    }

    /// Add an [`Endpoint`] to the specified path and method.
    ///
    /// Segments starting with `:` capture one path segment, the captured
    /// values are available from [`Request::params`]. Registering the same
    /// path and method again replaces the previous endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the path does not begin with `/`.
    #[must_use]
    pub fn add<E>(mut self, path: impl AsRef<str>, method: Method, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        let path = path.as_ref();
        tracing::debug!(method = %method, path = %path, "add route");
        check_result(
            self.routes
                .entry(method)
                .or_default()
                .add_route(path, ep.map_to_response().boxed()),
        );
        self
    }

    /// Add an [`Endpoint`] for `GET` requests.
    #[must_use]
    pub fn get<E>(self, path: impl AsRef<str>, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        self.add(path, Method::GET, ep)
    }

    /// Add an [`Endpoint`] for `POST` requests.
    #[must_use]
    pub fn post<E>(self, path: impl AsRef<str>, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        self.add(path, Method::POST, ep)
    }

    /// Add an [`Endpoint`] for `PUT` requests.
    #[must_use]
    pub fn put<E>(self, path: impl AsRef<str>, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        self.add(path, Method::PUT, ep)
    }

    /// Add an [`Endpoint`] for `DELETE` requests.
    #[must_use]
    pub fn delete<E>(self, path: impl AsRef<str>, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        self.add(path, Method::DELETE, ep)
    }

    /// Add an [`Endpoint`] for `OPTIONS` requests.
    #[must_use]
    pub fn options<E>(self, path: impl AsRef<str>, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        self.add(path, Method::OPTIONS, ep)
    }

    /// Add an [`Endpoint`] for `PATCH` requests.
    #[must_use]
    pub fn patch<E>(self, path: impl AsRef<str>, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        self.add(path, Method::PATCH, ep)
    }

    /// Add an [`Endpoint`] for `HEAD` requests.
    #[must_use]
    pub fn head<E>(self, path: impl AsRef<str>, ep: E) -> Self
    where
        E: Endpoint + 'static,
    {
        self.add(path, Method::HEAD, ep)
    }

    /// Lookup allows the manual lookup of a method + path combo.
    ///
    /// This is e.g. useful to build a framework around this router.
    pub fn lookup(&self, method: &Method, path: &str) -> Result<Matched<'_>, DispatchError> {
        if let Some((endpoint, params)) = self
            .routes
            .get(method)
            .and_then(|tree| tree.find_route(path))
        {
            return Ok(Matched { endpoint, params });
        }

        if self.handle_method_not_allowed && self.allowed_elsewhere(method, path) {
            Err(DispatchError::MethodNotAllowed)
        } else {
            Err(DispatchError::NotFound)
        }
    }

    fn allowed_elsewhere(&self, method: &Method, path: &str) -> bool {
        self.routes
            .iter()
            .filter(|(m, _)| *m != method)
            .any(|(_, tree)| tree.find_route(path).is_some())
    }
}

#[async_trait::async_trait]
impl Endpoint for Router {
    type Output = Response;

    async fn call(&self, mut req: Request) -> Self::Output {
        match self.lookup(req.method(), req.uri().path()) {
            Ok(Matched { endpoint, params }) => {
                req.set_params(params);
                endpoint.call(req).await
            }
            Err(err) => {
                tracing::debug!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    error = %err,
                    "no route matched"
                );
                err.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        endpoint::make_sync,
        http::{StatusCode, Uri},
    };

    async fn call(app: &Router, method: Method, path: &'static str) -> (StatusCode, String) {
        let resp = app
            .call(
                Request::builder()
                    .method(method)
                    .uri(Uri::from_static(path))
                    .finish(),
            )
            .await;
        (resp.status(), resp.into_body().into_string().await.unwrap())
    }

    fn ok(body: &'static str) -> (StatusCode, String) {
        (StatusCode::OK, body.to_string())
    }

    fn status(status: StatusCode) -> (StatusCode, String) {
        (status, String::new())
    }

    #[tokio::test]
    async fn static_routes() {
        let app = Router::new()
            .add("/ping", Method::GET, make_sync(|_| "Pong!"))
            .add("/ping/another", Method::GET, make_sync(|_| "Pong back!"));

        assert_eq!(call(&app, Method::GET, "/ping").await, ok("Pong!"));
        assert_eq!(call(&app, Method::GET, "/ping/another").await, ok("Pong back!"));
    }

    #[tokio::test]
    async fn static_route_with_file_extension() {
        let app = Router::new()
            .get("/articles/", make_sync(|_| "Pong!"))
            .get("/articles/go_command.html", make_sync(|_| "Pong back!"));

        assert_eq!(
            call(&app, Method::GET, "/articles/go_command.html").await,
            ok("Pong back!")
        );
        assert_eq!(call(&app, Method::GET, "/articles/").await, ok("Pong!"));
        assert_eq!(
            call(&app, Method::GET, "/articles").await,
            status(StatusCode::NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn not_found() {
        let app = Router::new()
            .get("/ping", make_sync(|_| "Pong!"))
            .get("/ping/another", make_sync(|_| "Pong back!"));

        assert_eq!(
            call(&app, Method::GET, "/ping/another/yet").await,
            status(StatusCode::NOT_FOUND)
        );
        assert_eq!(
            call(&app, Method::GET, "/pong").await,
            status(StatusCode::NOT_FOUND)
        );

        let app = Router::new().get("/ping/another", make_sync(|_| "Pong back!"));
        assert_eq!(
            call(&app, Method::GET, "/ping").await,
            status(StatusCode::NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn empty_router() {
        let app = Router::new();
        assert_eq!(
            call(&app, Method::GET, "/").await,
            status(StatusCode::NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn method_not_allowed() {
        let app = Router::new()
            .get("/pings", make_sync(|_| "Pong!"))
            .post(
                "/pings/:id",
                make_sync(|_| (StatusCode::CREATED, "Pong post!")),
            );

        assert_eq!(
            call(&app, Method::POST, "/pings").await,
            status(StatusCode::METHOD_NOT_ALLOWED)
        );
        assert_eq!(
            call(&app, Method::DELETE, "/pings/another").await,
            status(StatusCode::METHOD_NOT_ALLOWED)
        );
        assert_eq!(
            call(&app, Method::DELETE, "/pongs").await,
            status(StatusCode::NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn method_not_allowed_disabled() {
        let app = Router::new()
            .get("/pings", make_sync(|_| "Pong!"))
            .handle_method_not_allowed(false);

        assert_eq!(
            call(&app, Method::POST, "/pings").await,
            status(StatusCode::NOT_FOUND)
        );
        assert_eq!(call(&app, Method::GET, "/pings").await, ok("Pong!"));
    }

    #[tokio::test]
    async fn multiple_methods() {
        let app = Router::new()
            .get("/pings", make_sync(|_| "Pong!"))
            .post(
                "/pings/:id",
                make_sync(|_| (StatusCode::CREATED, "Pong post!")),
            )
            .delete(
                "/pings/:id",
                make_sync(|_| (StatusCode::ACCEPTED, "Pong delete!")),
            )
            .put("/pings/:id", make_sync(|_| "Pong put!"))
            .patch("/pings/:id", make_sync(|_| "Pong patch!"))
            .options("/pings", make_sync(|_| "Pong options!"))
            .head("/pings", make_sync(|_| StatusCode::OK));

        assert_eq!(call(&app, Method::GET, "/pings").await, ok("Pong!"));
        assert_eq!(
            call(&app, Method::POST, "/pings/1").await,
            (StatusCode::CREATED, "Pong post!".to_string())
        );
        assert_eq!(
            call(&app, Method::DELETE, "/pings/1").await,
            (StatusCode::ACCEPTED, "Pong delete!".to_string())
        );
        assert_eq!(call(&app, Method::PUT, "/pings/1").await, ok("Pong put!"));
        assert_eq!(call(&app, Method::PATCH, "/pings/1").await, ok("Pong patch!"));
        assert_eq!(
            call(&app, Method::OPTIONS, "/pings").await,
            ok("Pong options!")
        );
        assert_eq!(call(&app, Method::HEAD, "/pings").await, ok(""));
    }

    #[tokio::test]
    async fn extension_method() {
        let purge = Method::from_bytes(b"PURGE").unwrap();
        let app = Router::new().add("/cache/:key", purge.clone(), make_sync(|_| "purged"));

        assert_eq!(call(&app, purge, "/cache/pings").await, ok("purged"));
        assert_eq!(
            call(&app, Method::GET, "/cache/pings").await,
            status(StatusCode::METHOD_NOT_ALLOWED)
        );
    }

    #[tokio::test]
    async fn path_params() {
        let app = Router::new()
            .get(
                "/ping/:id",
                make_sync(|req| req.params().get("id").unwrap().to_string()),
            )
            .get(
                "/ping/:id/pong/:pongId",
                make_sync(|req| {
                    req.params()
                        .iter()
                        .map(|(name, value)| format!("{}={}", name, value))
                        .collect::<Vec<_>>()
                        .join(",")
                }),
            )
            .get("/ping/:id/yet/pongs", make_sync(|_| "4s"));

        assert_eq!(call(&app, Method::GET, "/ping/Pong").await, ok("Pong"));
        assert_eq!(
            call(&app, Method::GET, "/ping/1/pong/2").await,
            ok("id=1,pongId=2")
        );
        assert_eq!(
            call(&app, Method::GET, "/ping/some-id/yet/pongs").await,
            ok("4s")
        );
        assert_eq!(
            call(&app, Method::GET, "/ping/another/pong/yet/ping/pong").await,
            status(StatusCode::NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn unclean_path() {
        let app = Router::new()
            .get("/", make_sync(|_| "Index"))
            .get(
                "/pings/:id/pongs/:pongId",
                make_sync(|req| {
                    format!(
                        "[{}][{}]",
                        req.params().get("id").unwrap(),
                        req.params().get("pongId").unwrap()
                    )
                }),
            );

        assert_eq!(
            call(&app, Method::GET, "/pings//pongs/pong").await,
            ok("[][pong]")
        );
        assert_eq!(
            call(&app, Method::GET, "/pings/ping/pongs//").await,
            status(StatusCode::NOT_FOUND)
        );
        assert_eq!(call(&app, Method::GET, "/").await, ok("Index"));
    }

    #[tokio::test]
    async fn query_is_ignored() {
        let app = Router::new().get(
            "/ping/:id",
            make_sync(|req| req.params().get("id").unwrap().to_string()),
        );
        assert_eq!(
            call(&app, Method::GET, "/ping/Pong?verbose=true").await,
            ok("Pong")
        );
    }

    #[tokio::test]
    async fn percent_encoded_path() {
        let app = Router::new()
            .get(
                "/ping/:id",
                make_sync(|req| req.params().get("id").unwrap().to_string()),
            )
            .get("/café", make_sync(|_| "Café!"));

        assert_eq!(
            call(&app, Method::GET, "/ping/hello%20world").await,
            ok("hello world")
        );
        assert_eq!(call(&app, Method::GET, "/caf%C3%A9").await, ok("Café!"));
    }

    #[tokio::test]
    async fn last_registration_wins() {
        let app = Router::new()
            .get("/ping", make_sync(|_| "first"))
            .get("/ping", make_sync(|_| "second"));
        assert_eq!(call(&app, Method::GET, "/ping").await, ok("second"));
    }

    #[test]
    fn lookup() {
        let app = Router::new()
            .get("/pings", make_sync(|_| "Pong!"))
            .post("/pings/:id", make_sync(|_| "Pong post!"));

        let matched = app.lookup(&Method::POST, "/pings/1").ok().unwrap();
        assert_eq!(matched.params.get("id"), Some("1"));

        assert_eq!(
            app.lookup(&Method::GET, "/pings/1").err(),
            Some(DispatchError::MethodNotAllowed)
        );
        assert_eq!(
            app.lookup(&Method::PUT, "/pongs").err(),
            Some(DispatchError::NotFound)
        );
    }

    #[test]
    #[should_panic(expected = "invalid path: ping")]
    fn invalid_path() {
        let _ = Router::new().get("ping", make_sync(|_| "Pong!"));
    }
}

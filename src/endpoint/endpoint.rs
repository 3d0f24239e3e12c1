use std::{future::Future, marker::PhantomData, sync::Arc};

use super::MapToResponse;
use crate::{IntoResponse, Middleware, Request};

/// An HTTP request handler.
#[async_trait::async_trait]
pub trait Endpoint: Send + Sync {
    /// Represents the response of the endpoint.
    type Output: IntoResponse;

    /// Get the response to the request.
    async fn call(&self, req: Request) -> Self::Output;
}

struct SyncFnEndpoint<T, F> {
    _mark: PhantomData<fn() -> T>,
    f: F,
}

#[async_trait::async_trait]
impl<F, T> Endpoint for SyncFnEndpoint<T, F>
where
    F: Fn(Request) -> T + Send + Sync,
    T: IntoResponse,
{
    type Output = T;

    async fn call(&self, req: Request) -> Self::Output {
        (self.f)(req)
    }
}

struct AsyncFnEndpoint<T, F> {
    _mark: PhantomData<fn() -> T>,
    f: F,
}

#[async_trait::async_trait]
impl<F, Fut, T> Endpoint for AsyncFnEndpoint<T, F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = T> + Send,
    T: IntoResponse,
{
    type Output = T;

    async fn call(&self, req: Request) -> Self::Output {
        (self.f)(req).await
    }
}

/// Create an endpoint with a function.
///
/// # Example
///
/// ```
/// use trie_router::{endpoint::make_sync, http::Method, Endpoint, Request};
///
/// let ep = make_sync(|req| req.method().to_string());
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let resp = ep
///     .call(Request::builder().method(Method::GET).finish())
///     .await;
/// assert_eq!(resp, "GET");
/// # });
/// ```
pub fn make_sync<F, T>(f: F) -> impl Endpoint<Output = T>
where
    F: Fn(Request) -> T + Send + Sync,
    T: IntoResponse,
{
    SyncFnEndpoint {
        _mark: PhantomData,
        f,
    }
}

/// Create an endpoint with a asyncness function.
///
/// # Example
///
/// ```
/// use trie_router::{endpoint::make, http::Method, Endpoint, Request};
///
/// let ep = make(|req| async move { req.method().to_string() });
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let resp = ep
///     .call(Request::builder().method(Method::GET).finish())
///     .await;
/// assert_eq!(resp, "GET");
/// # });
/// ```
pub fn make<F, Fut, T>(f: F) -> impl Endpoint<Output = T>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = T> + Send,
    T: IntoResponse,
{
    AsyncFnEndpoint {
        _mark: PhantomData,
        f,
    }
}

#[async_trait::async_trait]
impl<T: Endpoint + ?Sized> Endpoint for &T {
    type Output = T::Output;

    async fn call(&self, req: Request) -> Self::Output {
        T::call(self, req).await
    }
}

#[async_trait::async_trait]
impl<T: Endpoint + ?Sized> Endpoint for Box<T> {
    type Output = T::Output;

    async fn call(&self, req: Request) -> Self::Output {
        self.as_ref().call(req).await
    }
}

#[async_trait::async_trait]
impl<T: Endpoint + ?Sized> Endpoint for Arc<T> {
    type Output = T::Output;

    async fn call(&self, req: Request) -> Self::Output {
        self.as_ref().call(req).await
    }
}

/// A `endpoint` that can be dynamically dispatched.
pub type BoxEndpoint<'a, T> = Box<dyn Endpoint<Output = T> + 'a>;

/// Extension trait for [`Endpoint`].
pub trait EndpointExt: Endpoint {
    /// Wrap the endpoint in a Box.
    fn boxed<'a>(self) -> BoxEndpoint<'a, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Use middleware to transform this endpoint.
    ///
    /// # Example
    ///
    /// ```
    /// use trie_router::{endpoint::make_sync, middleware::Tracing, EndpointExt, Router};
    ///
    /// let app = Router::new()
    ///     .get("/ping", make_sync(|_| "pong"))
    ///     .with(Tracing);
    /// ```
    fn with<T>(self, middleware: T) -> T::Output
    where
        T: Middleware<Self>,
        Self: Sized,
    {
        middleware.transform(self)
    }

    /// Convert the output of this endpoint into a response.
    /// [`Response`](crate::Response).
    fn map_to_response(self) -> MapToResponse<Self>
    where
        Self: Sized,
    {
        MapToResponse::new(self)
    }
}

impl<T: Endpoint> EndpointExt for T {}

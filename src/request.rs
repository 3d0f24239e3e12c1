use std::fmt::{self, Debug, Formatter};

use crate::{
    http::{
        header::HeaderMap,
        Method, Uri, Version,
    },
    route::Params,
    Body,
};

struct Parts {
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
}

/// Represents an HTTP request.
pub struct Request {
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
    body: Body,
    params: Params,
}

impl Debug for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("params", &self.params)
            .finish()
    }
}

impl Default for Request {
    fn default() -> Self {
        Request::builder().finish()
    }
}

impl Request {
    /// Converts a hyper request, the path parameters are empty until the
    /// request has been routed.
    pub fn from_hyper_request(req: hyper::Request<hyper::Body>) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            version: parts.version,
            headers: parts.headers,
            body: Body(body),
            params: Params::default(),
        }
    }

    /// Creates a new builder-style object to manufacture a Request.
    pub fn builder() -> RequestBuilder {
        RequestBuilder(Parts {
            method: Method::GET,
            uri: Uri::from_static("/"),
            version: Version::default(),
            headers: HeaderMap::new(),
        })
    }

    /// Returns a reference to the associated HTTP method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Sets the HTTP method for this request.
    #[inline]
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Returns a reference to the associated URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets the URI for this request.
    #[inline]
    pub fn set_uri(&mut self, uri: Uri) {
        self.uri = uri;
    }

    /// Returns the associated version.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns a reference to the associated header map.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a mutable reference to the associated header map.
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Returns the path parameters bound by the router.
    ///
    /// Empty unless the request was dispatched by a [`Router`](crate::Router).
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[inline]
    pub(crate) fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    /// Take the body from this request and sets the body to empty.
    #[inline]
    pub fn take_body(&mut self) -> Body {
        std::mem::take(&mut self.body)
    }
}

/// An request builder.
pub struct RequestBuilder(Parts);

impl RequestBuilder {
    /// Sets the HTTP method for this request.
    ///
    /// By default this is [`Method::GET`].
    #[must_use]
    pub fn method(self, method: Method) -> RequestBuilder {
        Self(Parts { method, ..self.0 })
    }

    /// Sets the URI for this request.
    ///
    /// By default this is `/`.
    #[must_use]
    pub fn uri(self, uri: Uri) -> RequestBuilder {
        Self(Parts { uri, ..self.0 })
    }

    /// Consumes this builder, using the provided body to return a
    /// constructed [`Request`].
    pub fn body(self, body: impl Into<Body>) -> Request {
        Request {
            method: self.0.method,
            uri: self.0.uri,
            version: self.0.version,
            headers: self.0.headers,
            body: body.into(),
            params: Params::default(),
        }
    }

    /// Consumes this builder to return a [`Request`] with an empty body.
    pub fn finish(self) -> Request {
        self.body(Body::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let req = Request::default();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.uri().path(), "/");
        assert!(req.params().is_empty());
    }

    #[tokio::test]
    async fn from_hyper_request() {
        let hyper_req = hyper::Request::builder()
            .method(Method::POST)
            .uri("/pings/1?verbose=true")
            .version(Version::HTTP_2)
            .header("x-ping", "pong")
            .body(hyper::Body::from("ping"))
            .unwrap();

        let mut req = Request::from_hyper_request(hyper_req);
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri().path(), "/pings/1");
        assert_eq!(req.version(), Version::HTTP_2);
        assert_eq!(req.headers().get("x-ping").unwrap(), "pong");
        assert_eq!(req.take_body().into_string().await.unwrap(), "ping");
        assert_eq!(req.take_body().into_string().await.unwrap(), "");
    }
}

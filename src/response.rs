use crate::{
    http::{
        header::{self, HeaderMap, HeaderName, HeaderValue},
        StatusCode,
    },
    Body,
};

struct Parts {
    status: StatusCode,
    headers: HeaderMap,
}

/// Represents an HTTP response.
#[derive(Default)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl From<StatusCode> for Response {
    fn from(status: StatusCode) -> Self {
        Response::builder().status(status).finish()
    }
}

impl Response {
    pub(crate) fn into_hyper_response(self) -> hyper::Response<hyper::Body> {
        let mut resp = hyper::Response::new(self.body.0);
        *resp.status_mut() = self.status;
        *resp.headers_mut() = self.headers;
        resp
    }

    /// Creates a response builder.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder(Parts {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
        })
    }

    /// Returns the associated status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Sets the status code for this response.
    #[inline]
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
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

    /// Consumes the response returning the body.
    #[inline]
    pub fn into_body(self) -> Body {
        self.body
    }
}

/// An response builder.
pub struct ResponseBuilder(Parts);

impl ResponseBuilder {
    /// Sets the HTTP status for this response.
    ///
    /// By default this is [`StatusCode::OK`].
    #[must_use]
    pub fn status(self, status: StatusCode) -> Self {
        Self(Parts { status, ..self.0 })
    }

    /// Appends a header to this response builder.
    #[must_use]
    pub fn header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.0.headers.append(key, value);
        self
    }

    /// Sets the `Content-Type` header on the response.
    #[must_use]
    pub fn content_type(self, content_type: &'static str) -> Self {
        self.header(
            header::CONTENT_TYPE,
            HeaderValue::from_static(content_type),
        )
    }

    /// Consumes this builder, using the provided body to return a
    /// constructed [`Response`].
    pub fn body(self, body: impl Into<Body>) -> Response {
        Response {
            status: self.0.status,
            headers: self.0.headers,
            body: body.into(),
        }
    }

    /// Consumes this builder to return a [`Response`] with an empty body.
    pub fn finish(self) -> Response {
        self.body(Body::empty())
    }
}

/// Represents a type that can convert into response.
pub trait IntoResponse: Send {
    /// Consume itself and return [`Response`].
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        self.into()
    }
}

impl IntoResponse for () {
    fn into_response(self) -> Response {
        Response::builder().finish()
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::builder()
            .content_type("text/plain; charset=utf-8")
            .body(self)
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Response::builder()
            .content_type("text/plain; charset=utf-8")
            .body(self)
    }
}

impl<T: IntoResponse> IntoResponse for (StatusCode, T) {
    fn into_response(self) -> Response {
        let mut resp = self.1.into_response();
        resp.set_status(self.0);
        resp
    }
}

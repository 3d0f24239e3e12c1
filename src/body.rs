use std::io::{Error as IoError, ErrorKind};

use bytes::Bytes;

use crate::error::ReadBodyError;

/// The body of a [`Request`](crate::Request) or [`Response`](crate::Response).
///
/// Endpoints build it from text or raw bytes and read it back whole.
#[derive(Default)]
pub struct Body(pub(crate) hyper::Body);

impl From<&'static str> for Body {
    #[inline]
    fn from(data: &'static str) -> Self {
        Self(data.into())
    }
}

impl From<Vec<u8>> for Body {
    #[inline]
    fn from(data: Vec<u8>) -> Self {
        Self(data.into())
    }
}

impl From<String> for Body {
    #[inline]
    fn from(data: String) -> Self {
        Self(data.into())
    }
}

impl Body {
    /// Create an empty body.
    #[inline]
    pub fn empty() -> Self {
        Self(hyper::Body::empty())
    }

    /// Reads the whole body.
    pub async fn into_bytes(self) -> Result<Bytes, ReadBodyError> {
        hyper::body::to_bytes(self.0)
            .await
            .map_err(|err| ReadBodyError::Io(IoError::new(ErrorKind::Other, err)))
    }

    /// Reads the whole body as UTF-8 text.
    pub async fn into_string(self) -> Result<String, ReadBodyError> {
        Ok(String::from_utf8(self.into_bytes().await?.to_vec())?)
    }
}

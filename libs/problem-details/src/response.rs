//! Writing a [`Problem`] as an HTTP response.
//!
//! The writer only depends on the minimal [`ResponseSink`] capability, so it can
//! be plugged into any server framework. All validation (encoding, body, status)
//! happens before the sink is touched; a failed call leaves the sink unmodified
//! unless the body write itself fails.

use std::convert::Infallible;

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{Response, StatusCode};

use crate::config::ProblemResponseConfig;
use crate::encoding::Encoding;
use crate::error::ProblemError;
use crate::problem::Problem;

/// Response capability consumed by [`write_response`].
pub trait ResponseSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn set_status(&mut self, status: StatusCode);

    /// # Errors
    /// Returns the sink's error if the body could not be written.
    fn write_body(&mut self, body: &[u8]) -> Result<(), Self::Error>;
}

impl ResponseSink for Response<Vec<u8>> {
    type Error = Infallible;

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: &[u8]) -> Result<(), Self::Error> {
        self.body_mut().extend_from_slice(body);
        Ok(())
    }
}

/// Write `problem` to `sink` with the given encoding and a default status of 400.
///
/// # Errors
/// See [`write_response_with`].
pub fn write_response<S>(
    sink: &mut S,
    problem: &Problem,
    encoding: Encoding,
) -> Result<(), ProblemError>
where
    S: ResponseSink + ?Sized,
{
    let config = ProblemResponseConfig {
        encoding,
        ..ProblemResponseConfig::default()
    };
    write_response_with(sink, problem, &config)
}

/// Write `problem` to `sink`: content type, then status, then body.
///
/// # Errors
/// - [`ProblemError::UnsupportedEncoding`] if the configured encoding has no implementation
/// - [`ProblemError::Encode`] if the problem cannot be serialized
/// - [`ProblemError::InvalidStatus`] if the resolved status is not a valid HTTP status
/// - [`ProblemError::Write`] if the sink rejects the body
pub fn write_response_with<S>(
    sink: &mut S,
    problem: &Problem,
    config: &ProblemResponseConfig,
) -> Result<(), ProblemError>
where
    S: ResponseSink + ?Sized,
{
    let encoding = config.encoding;
    if !encoding.is_supported() {
        return Err(ProblemError::UnsupportedEncoding(encoding));
    }
    let body = problem.to_json_vec()?;
    let status = config.resolve_status(problem.status)?;

    sink.set_header(CONTENT_TYPE, HeaderValue::from_static(encoding.media_type()));
    sink.set_status(status);
    if let Err(err) = sink.write_body(&body) {
        tracing::warn!(status = status.as_u16(), error = %err, "problem response body rejected by sink");
        return Err(ProblemError::Write(Box::new(err)));
    }

    tracing::debug!(
        status = status.as_u16(),
        content_type = encoding.media_type(),
        body_len = body.len(),
        "problem response written"
    );
    Ok(())
}

/// Axum integration: make Problem directly usable as a response
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Problem {
    fn into_response(self) -> axum::response::Response {
        use axum::response::IntoResponse as _;

        let mut resp = Response::new(Vec::new());
        match write_response(&mut resp, &self, Encoding::Json) {
            Ok(()) => resp.map(axum::body::Body::from),
            Err(err) => {
                tracing::error!(error = %err, "failed to render problem response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

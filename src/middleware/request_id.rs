use axum::{body::Body, extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::fmt::Display;
use uuid::Uuid;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id stored in request extensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuses a well-formed incoming id, otherwise mints a v4 UUID
    pub fn from_request(request: &Request) -> Self {
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(Self)
            .unwrap_or_else(|| Self(Uuid::new_v4()))
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tags every request with a [`RequestId`] and echoes it on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Span factory for `TraceLayer` that records the request id
pub fn make_span_with_request_id(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_valid_incoming_id() {
        let id = Uuid::new_v4();
        let request = axum::http::Request::builder()
            .header(REQUEST_ID_HEADER, id.to_string())
            .body(Body::empty())
            .unwrap();
        assert_eq!(RequestId::from_request(&request), RequestId(id));
    }

    #[test]
    fn test_replaces_malformed_incoming_id() {
        let request = axum::http::Request::builder()
            .header(REQUEST_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let id = RequestId::from_request(&request);
        assert_eq!(id.0.get_version_num(), 4);
    }
}

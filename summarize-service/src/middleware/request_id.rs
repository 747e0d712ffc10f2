use axum::http::{HeaderMap, HeaderValue};
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied id that is carried through to logs.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation id for one inbound request, available as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub HeaderValue);

impl RequestId {
    /// Take the caller's id when it is short, visible ASCII; otherwise mint a UUID.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let supplied = headers.get(REQUEST_ID_HEADER).filter(|value| {
            let bytes = value.as_bytes();
            !bytes.is_empty()
                && bytes.len() <= MAX_REQUEST_ID_LEN
                && bytes.iter().all(u8::is_ascii_graphic)
        });

        match supplied {
            Some(value) => Self(value.clone()),
            None => Self::generate(),
        }
    }

    fn generate() -> Self {
        let id = Uuid::new_v4().hyphenated().to_string();
        // A hyphenated UUID is always a valid header value.
        Self(HeaderValue::from_str(&id).unwrap_or_else(|_| HeaderValue::from_static("-")))
    }
}

/// Normalise `x-request-id` on the way in and echo it on the way out.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(req.headers());

    req.headers_mut().insert(REQUEST_ID_HEADER, request_id.0.clone());
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id.0);

    response
}

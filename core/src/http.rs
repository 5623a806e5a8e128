//! HTTP transport boundary for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are described as plain data. The core builds
//! `HttpRequest` values and interprets `HttpResponse` values; the actual
//! round-trip is performed by a `Transport` supplied by the environment.
//! This keeps the clients deterministic and testable without a network.
//!
//! `Transport::execute` is blocking: it returns only once the server has
//! responded (or the connection failed). Clients issue one request at a time
//! and never overlap calls, so a transport needs no internal synchronization.

use std::fmt;

use crate::error::ApiError;

/// HTTP method for a request. The course API only uses GET and POST
/// (deletion and approval are POSTs on dedicated paths).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data, ready for a `Transport` to
/// execute. `path` is the full URL including the base server URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A credentialed GET request.
    pub fn get(path: String, session: &SessionToken) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            headers: vec![session.cookie_header()],
            body: None,
        }
    }

    /// A credentialed POST request, with a JSON body if one is given.
    pub fn post(path: String, session: &SessionToken, body: Option<String>) -> Self {
        let mut headers = vec![session.cookie_header()];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        Self {
            method: HttpMethod::Post,
            path,
            headers,
            body,
        }
    }
}

/// An HTTP response described as plain data, as returned by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Map non-2xx statuses to `ApiError::HttpError`. The API makes no finer
    /// distinction between server failure classes.
    pub fn check_status(self) -> Result<Self, ApiError> {
        if (200..300).contains(&self.status) {
            return Ok(self);
        }
        Err(ApiError::HttpError {
            status: self.status,
            body: self.body,
        })
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Blocking request executor supplied by the host environment.
///
/// Implementations must return non-2xx responses as `Ok(HttpResponse)` so the
/// clients can interpret the status themselves; `Err` is reserved for
/// failures where no response was obtained at all (connection refused, DNS,
/// broken pipe), reported as `ApiError::TransportError`. Timeout policy, if
/// any, belongs to the implementation — the core imposes none.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Session credential attached to every request.
///
/// The original system relied on an ambient browser cookie; here the token is
/// explicit — constructed once, handed to each client, and sent as the
/// `access_token` cookie the server's session layer reads.
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The `cookie` header carrying this token.
    pub fn cookie_header(&self) -> (String, String) {
        ("cookie".to_string(), format!("access_token={}", self.0))
    }
}

// The raw token must not leak through debug output of the clients.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"<redacted>").finish()
    }
}

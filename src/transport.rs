//! The transport boundary: how a resolved request gets executed.
//!
//! The core never opens sockets itself. It hands an [`ApiRequest`] to a
//! [`Transport`] and receives back a [`RawResponse`] — bytes or not, status
//! or not, error or not — which the decoding pipeline in
//! [`crate::response`] turns into a typed outcome. [`HttpTransport`] is the
//! reqwest-backed default; tests and embedders can supply their own.

use std::future::Future;

use http::{header, StatusCode};

use crate::endpoint::ApiRequest;
use crate::error::Error;

/// What came back from the wire, before any decoding.
///
/// Any of the three parts can be absent independently; the decode pipeline
/// is responsible for making sense of the combination.
#[derive(Debug, Default)]
pub struct RawResponse {
    /// The response body, if one was received.
    pub body: Option<Vec<u8>>,
    /// The HTTP status, if a response arrived at all.
    pub status: Option<StatusCode>,
    /// The transport-level failure, if one occurred.
    pub error: Option<Error>,
}

/// An executor for [`ApiRequest`]s.
///
/// Implementations report everything through the returned [`RawResponse`]
/// rather than a `Result`: a transport failure is just a response with
/// `error` set and no body.
pub trait Transport: Send + Sync {
    /// Executes the request and resolves with whatever came back.
    fn execute(&self, request: ApiRequest) -> impl Future<Output = RawResponse> + Send;
}

/// The default transport, backed by a shared `reqwest::Client`.
///
/// It does not inspect status codes: a non-2xx response with a body is
/// returned as-is, so the API's own error envelope can reach the decode
/// fallback.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

const USER_AGENT: &str = concat!("openaq-rs/", env!("CARGO_PKG_VERSION"));

impl HttpTransport {
    /// Creates a transport with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport from an existing `reqwest::Client`, keeping its
    /// connection pool and configuration.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = RawResponse> + Send {
        let call = self
            .http
            .request(request.method, request.url)
            .header(header::USER_AGENT, USER_AGENT)
            .send();

        async move {
            let response = match call.await {
                Ok(response) => response,
                Err(e) => {
                    return RawResponse {
                        error: Some(Error::Network(e)),
                        ..Default::default()
                    }
                }
            };

            let status = response.status();
            match response.bytes().await {
                Ok(body) => RawResponse {
                    body: Some(body.to_vec()),
                    status: Some(status),
                    error: None,
                },
                Err(e) => RawResponse {
                    body: None,
                    status: Some(status),
                    error: Some(Error::Network(e)),
                },
            }
        }
    }
}

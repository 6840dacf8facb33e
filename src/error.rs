//! Error types for OpenAQ API calls.
//!
//! This module provides error types that preserve the debugging information
//! relevant at each stage of a request: URL construction, transport, and
//! response decoding. Failures reported by the API itself arrive as an
//! [`ErrorResponse`] and are surfaced through [`Error::Api`].

use serde::{Deserialize, Serialize};

/// The main error type for OpenAQ API calls.
///
/// # Examples
///
/// ```no_run
/// use openaq::{params::CitiesParameters, Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new();
///
/// match client.cities(CitiesParameters::default()).await {
///     Ok(cities) => println!("{} cities", cities.results.len()),
///     Err(Error::Api(response)) => {
///         eprintln!("API reported {}: {}", response.status_code, response.error);
///     }
///     Err(Error::Decode { raw_response, serde_error }) => {
///         eprintln!("Undecodable response: {}", serde_error);
///         eprintln!("  Raw body: {}", raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be constructed from the endpoint.
    ///
    /// Unreachable with the fixed host and version constants; reserved for
    /// future endpoint variants carrying caller-supplied components.
    #[error("Failed to construct request URL: {0}")]
    Construction(#[from] url::ParseError),

    /// A transport-level error occurred (connection failed, DNS lookup
    /// failed, body read aborted, etc.).
    ///
    /// This wraps the underlying `reqwest::Error` and is propagated verbatim
    /// from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The transport delivered neither a body nor an error.
    ///
    /// An inconsistent but observable external state; decoding fails
    /// immediately rather than guessing.
    #[error("Response contained no body")]
    EmptyResponse,

    /// Failed to decode the response body into the expected shape.
    ///
    /// Raised only after the domain-error fallback decode also failed, so
    /// this always carries the *primary* decode failure together with the
    /// raw body for debugging.
    ///
    /// # Fields
    ///
    /// * `raw_response` - The raw response body as a string
    /// * `serde_error` - The error message from serde
    #[error("Failed to decode response: {serde_error}")]
    Decode {
        /// The raw response body that failed to decode
        raw_response: String,
        /// The serde error message from the primary decode attempt
        serde_error: String,
    },

    /// The API explicitly reported a failure in its own error shape.
    ///
    /// Takes precedence over [`Error::Decode`] whenever the response body
    /// decodes as an [`ErrorResponse`].
    #[error("{0}")]
    Api(ErrorResponse),
}

impl Error {
    /// Returns the API-reported status code if this error carries one.
    ///
    /// # Examples
    ///
    /// ```
    /// use openaq::{Error, ErrorResponse};
    ///
    /// let err = Error::Api(ErrorResponse {
    ///     status_code: 404,
    ///     error: "not_found".to_string(),
    ///     message: None,
    /// });
    ///
    /// assert_eq!(err.status_code(), Some(404));
    /// assert_eq!(Error::EmptyResponse.status_code(), None);
    /// ```
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api(response) => Some(response.status_code),
            _ => None,
        }
    }

    /// Returns the raw response body if this error preserved one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Decode { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

/// The error envelope returned by the OpenAQ API itself.
///
/// Distinct from a generic decode failure: the API answered, and the answer
/// was a structured refusal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// The HTTP status code the API attached to the error.
    pub status_code: u16,
    /// The error's name, e.g. `not_found`.
    pub error: String,
    /// An optional human-readable message.
    pub message: Option<String>,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API error {} ({})", self.status_code, self.error)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// A specialized `Result` type for OpenAQ API calls.
pub type Result<T> = std::result::Result<T, Error>;

//! Response decoding: raw transport output to typed result or typed error.
//!
//! Decoding is a fixed two-path pipeline. The primary attempt decodes the
//! body strictly into the expected shape. If that fails for any reason —
//! invalid JSON, a missing or mistyped field, a malformed date — a fallback
//! attempt decodes the body as the API's error envelope, and a fallback
//! success is surfaced as [`Error::Api`]. When both attempts fail, the
//! *primary* error is returned: it is the diagnostically useful one.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorResponse, Result};
use crate::transport::RawResponse;

/// Decodes a raw response into the expected shape.
///
/// With no body present, decoding fails immediately with the
/// transport-reported error, or with [`Error::EmptyResponse`] when the
/// transport reported nothing at all.
///
/// # Examples
///
/// ```
/// use openaq::{decode_body, model::{City, Envelope}, RawResponse};
///
/// let raw = RawResponse {
///     body: Some(br#"{
///         "meta": {"name": "openaq-api", "license": "CC BY 4.0", "website": "https://docs.openaq.org/"},
///         "results": [{"city": "Amsterdam", "country": "NL", "count": 21301, "locations": 14}]
///     }"#.to_vec()),
///     status: Some(http::StatusCode::OK),
///     error: None,
/// };
///
/// let cities: Envelope<City> = decode_body(raw).unwrap();
/// assert_eq!(cities.results[0].name, "Amsterdam");
/// ```
pub fn decode_body<T>(response: RawResponse) -> Result<T>
where
    T: DeserializeOwned,
{
    let body = match response.body {
        Some(body) => body,
        None => return Err(response.error.unwrap_or(Error::EmptyResponse)),
    };

    match serde_json::from_slice::<T>(&body) {
        Ok(value) => Ok(value),
        Err(primary) => match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(api_error) => Err(Error::Api(api_error)),
            Err(_) => Err(Error::Decode {
                raw_response: String::from_utf8_lossy(&body).into_owned(),
                serde_error: primary.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{City, Envelope};

    fn raw(body: &str) -> RawResponse {
        RawResponse {
            body: Some(body.as_bytes().to_vec()),
            status: Some(http::StatusCode::OK),
            error: None,
        }
    }

    #[test]
    fn decodes_the_result_envelope() {
        let body = r#"{
            "meta": {
                "name": "openaq-api",
                "license": "CC BY 4.0",
                "website": "https://docs.openaq.org/",
                "page": 1,
                "limit": 100,
                "found": 2
            },
            "results": [
                {"city": "Amsterdam", "country": "NL", "count": 21301, "locations": 14},
                {"city": "Utrecht", "country": "NL", "count": 12022, "locations": 7}
            ]
        }"#;
        let cities: Envelope<City> = decode_body(raw(body)).unwrap();
        assert_eq!(cities.results.len(), 2);
        assert_eq!(cities.meta.found, Some(2));
        assert_eq!(cities.results[1].measurement_count, 12022);
    }

    #[test]
    fn falls_back_to_the_error_envelope() {
        let body = r#"{"statusCode":404,"error":"not_found","message":"no such city"}"#;
        let result: Result<Envelope<City>> = decode_body(raw(body));
        match result {
            Err(Error::Api(response)) => {
                assert_eq!(response.status_code, 404);
                assert_eq!(response.error, "not_found");
                assert_eq!(response.message.as_deref(), Some("no such city"));
            }
            other => panic!("Expected Error::Api, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn surfaces_the_primary_error_when_both_decodes_fail() {
        let result: Result<Envelope<City>> = decode_body(raw(r#"{"foo":"bar"}"#));
        match result {
            Err(Error::Decode {
                raw_response,
                serde_error,
            }) => {
                assert_eq!(raw_response, r#"{"foo":"bar"}"#);
                assert!(serde_error.contains("meta"));
            }
            other => panic!("Expected Error::Decode, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn no_body_surfaces_the_transport_error() {
        let response = RawResponse {
            body: None,
            status: None,
            error: Some(Error::EmptyResponse),
        };
        assert!(matches!(
            decode_body::<Envelope<City>>(response),
            Err(Error::EmptyResponse)
        ));
    }

    #[test]
    fn no_body_and_no_error_fails_with_empty_response() {
        let result = decode_body::<Envelope<City>>(RawResponse::default());
        assert!(matches!(result, Err(Error::EmptyResponse)));
    }

    #[test]
    fn malformed_dates_fail_the_primary_decode() {
        let body = r#"{
            "meta": {"name": "openaq-api", "license": "CC BY 4.0", "website": "https://docs.openaq.org/"},
            "results": [{
                "location": "Amsterdam-Einsteinweg",
                "city": "Amsterdam",
                "country": "NL",
                "measurements": [{
                    "parameter": "no2",
                    "value": 44.51,
                    "lastUpdated": "yesterday",
                    "unit": "µg/m³",
                    "sourceName": "Netherlands"
                }]
            }]
        }"#;
        let result: Result<Envelope<crate::model::Latest>> = decode_body(raw(body));
        match result {
            Err(Error::Decode { serde_error, .. }) => {
                assert!(serde_error.contains("invalid date: yesterday"));
            }
            other => panic!("Expected Error::Decode, got {:?}", other.map(|_| ())),
        }
    }
}

//! # openaq - A typed client for the OpenAQ air quality API
//!
//! This crate wraps the fixed OpenAQ v1 REST API in a typed, async
//! interface: strongly-typed query parameters in, typed results or typed
//! errors out. It is built on `reqwest`, keeps all parameter encoding
//! deterministic, and decodes every response through a two-path pipeline
//! that recognizes both the API's success envelope and its error envelope.
//!
//! ## Quick Start
//!
//! ```no_run
//! use openaq::params::{LatestParameters, SortOrder};
//! use openaq::model::Coordinate;
//! use openaq::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), openaq::Error> {
//!     let client = Client::new();
//!
//!     // The latest air quality readings near New York City.
//!     let latest = client
//!         .latest(LatestParameters {
//!             coordinates: Some(Coordinate {
//!                 latitude: 40.7128,
//!                 longitude: -74.0060,
//!             }),
//!             radius: Some(10_000),
//!             sort: Some(SortOrder::Descending),
//!             limit: Some(10),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     for entry in &latest.results {
//!         for measurement in &entry.measurements {
//!             println!(
//!                 "{}: {} {} ({})",
//!                 entry.location,
//!                 measurement.value,
//!                 measurement.unit,
//!                 measurement.parameter.as_str(),
//!             );
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One method per resource** - cities, countries, fetches, latest,
//!   locations, measurements, parameters, and sources
//! - **Typed parameters** - optional fields are simply omitted from the
//!   query string; enums encode to their documented wire tokens;
//!   coordinates encode as a single `lat,lon` value
//! - **Deterministic encoding** - query pairs follow field declaration
//!   order, so the same parameters always produce the same URL
//! - **Dual-path decoding** - responses that fail to match the expected
//!   shape are re-read as the API's error envelope before a decode failure
//!   is reported
//! - **Pluggable transport** - the [`Transport`] seam executes requests;
//!   supply your own for testing or custom HTTP stacks
//! - **No hidden behavior** - no retries, no caching, no pagination
//!   traversal; one request in, one result out
//!
//! ## Error Handling
//!
//! Every failure is a typed [`Error`]. The API's own refusals are kept
//! distinct from decode problems:
//!
//! ```no_run
//! use openaq::params::CitiesParameters;
//! use openaq::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! let client = Client::new();
//! match client.cities(CitiesParameters::default()).await {
//!     Ok(cities) => println!("{} cities", cities.results.len()),
//!     Err(Error::Api(response)) => {
//!         // The API answered with its error envelope.
//!         eprintln!("{}: {:?}", response.status_code, response.message);
//!     }
//!     Err(Error::Decode { serde_error, .. }) => {
//!         eprintln!("Undecodable response: {}", serde_error);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Sharing a client
//!
//! A [`Client`] is cheap to clone and safe to use from concurrent tasks.
//! [`Client::shared`] returns a lazily-constructed process-wide instance
//! for callers that do not want to manage their own.

mod client;
mod endpoint;
mod error;
mod response;
mod transport;

pub mod datetime;
pub mod model;
pub mod params;

pub use client::Client;
pub use endpoint::{ApiRequest, Endpoint};
pub use error::{Error, ErrorResponse, Result};
pub use model::{Envelope, Meta};
pub use response::decode_body;
pub use transport::{HttpTransport, RawResponse, Transport};

//! Response models for the OpenAQ API.
//!
//! Every successful response is an [`Envelope`]: shared [`Meta`] information
//! plus a `results` array whose element type varies by resource. The
//! structs here mirror the v1 wire format field-for-field; names that
//! differ from the wire carry a `#[serde(rename)]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// The standard success envelope wrapping every resource listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Dataset name, licensing and pagination information.
    pub meta: Meta,
    /// The resource items matched by the query.
    pub results: Vec<T>,
}

/// Dataset information attached to every response.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// The name of the dataset, e.g. `openaq-api`.
    pub name: String,
    /// The license the data is provided under.
    pub license: String,
    /// A website linking to the source of the data.
    pub website: Url,
    /// The page of results this response covers.
    pub page: Option<u32>,
    /// The maximum number of results per page.
    pub limit: Option<u32>,
    /// The total number of results found for the query.
    pub found: Option<u64>,
}

/// A latitude/longitude pair.
///
/// Responses carry coordinates as a JSON object; in query strings the pair
/// encodes as the single comma-joined value produced by its `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// The latitude of the coordinate.
    pub latitude: f64,
    /// The longitude of the coordinate.
    pub longitude: f64,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// The pollutants the OpenAQ platform measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQualityParameter {
    /// Particulate matter smaller than 2.5 micrometers.
    Pm25,
    /// Particulate matter smaller than 10 micrometers.
    Pm10,
    /// Sulfur dioxide.
    So2,
    /// Nitrogen dioxide.
    No2,
    /// Ozone.
    O3,
    /// Carbon monoxide.
    Co,
    /// Black carbon.
    Bc,
}

impl AirQualityParameter {
    /// The token used for this parameter on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            AirQualityParameter::Pm25 => "pm25",
            AirQualityParameter::Pm10 => "pm10",
            AirQualityParameter::So2 => "so2",
            AirQualityParameter::No2 => "no2",
            AirQualityParameter::O3 => "o3",
            AirQualityParameter::Co => "co",
            AirQualityParameter::Bc => "bc",
        }
    }
}

/// A city with air quality data in the OpenAQ platform.
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    /// The name of the city.
    #[serde(rename = "city")]
    pub name: String,
    /// The two-letter ISO code of the country containing the city.
    pub country: String,
    /// The number of measurements taken for this city.
    #[serde(rename = "count")]
    pub measurement_count: u64,
    /// The number of air monitoring locations in the city.
    #[serde(rename = "locations")]
    pub location_count: u64,
}

/// A country with air quality data in the OpenAQ platform.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    /// The two-letter ISO code of the country.
    #[serde(rename = "code")]
    pub iso_code: String,
    /// The name of the country.
    pub name: String,
    /// The number of measurements taken for this country.
    #[serde(rename = "count")]
    pub measurement_count: u64,
    /// The number of cities monitored in this country.
    #[serde(rename = "cities")]
    pub city_count: u64,
    /// The number of air monitoring locations in this country.
    #[serde(rename = "locations")]
    pub location_count: u64,
}

/// One fetch operation used to populate data on the OpenAQ platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fetch {
    /// The count of new, inserted measurements.
    pub count: u64,
    /// Per-source details for this fetch.
    pub results: Vec<FetchSource>,
    /// When the fetch started.
    #[serde(with = "crate::datetime")]
    pub time_started: DateTime<Utc>,
    /// When the fetch ended.
    #[serde(with = "crate::datetime")]
    pub time_ended: DateTime<Utc>,
}

/// Details about one source within a fetch operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchSource {
    /// A message about the fetch.
    pub message: String,
    /// The count of new, inserted measurements.
    pub count: u64,
    /// How long the fetch took, in seconds.
    pub duration: f64,
    /// The name of the source of the fetch.
    pub source_name: String,
}

/// The latest value of each measured parameter for one location.
#[derive(Debug, Clone, Deserialize)]
pub struct Latest {
    /// The identifier of the location.
    pub location: String,
    /// The city containing the location.
    pub city: String,
    /// The two-letter ISO code of the country.
    pub country: String,
    /// The latest measurement for each parameter present at the location.
    pub measurements: Vec<LatestMeasurement>,
}

/// One entry in a [`Latest`] listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestMeasurement {
    /// Which air quality attribute was measured.
    pub parameter: AirQualityParameter,
    /// The measured value.
    pub value: f64,
    /// When the measurement was last updated.
    #[serde(with = "crate::datetime")]
    pub last_updated: DateTime<Utc>,
    /// The unit the value is expressed in.
    pub unit: String,
    /// The name of the source the measurement originated from.
    pub source_name: String,
}

/// An air monitoring location in the OpenAQ platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The location identifier.
    #[serde(rename = "location")]
    pub id: String,
    /// The two-letter ISO code of the country.
    pub country: String,
    /// The city containing the location.
    pub city: String,
    /// The number of measurements, cumulative by specificity level.
    pub count: u64,
    /// Distance to the queried coordinates; present when the request
    /// carried `coordinates`.
    pub distance: Option<f64>,
    /// The adapter used for this location.
    pub source_name: String,
    /// When data from this location was first used.
    #[serde(with = "crate::datetime")]
    pub first_updated: DateTime<Utc>,
    /// When data from this location was last used.
    #[serde(with = "crate::datetime")]
    pub last_updated: DateTime<Utc>,
    /// The parameters measured at this location.
    pub parameters: Vec<AirQualityParameter>,
    /// The coordinates of the location.
    pub coordinates: Option<Coordinate>,
}

/// An individual measurement in the OpenAQ platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// The name of the measured parameter.
    pub parameter: String,
    /// The measured value.
    pub value: f64,
    /// The unit the value is expressed in.
    pub unit: String,
    /// The location the measurement was taken at.
    pub location: String,
    /// The two-letter ISO code of the country.
    pub country: String,
    /// The city the measurement was taken in.
    pub city: String,
    /// Where the measurement was taken.
    pub coordinates: Option<Coordinate>,
    /// The source name, matching the sources listing.
    pub source_name: Option<String>,
    /// Attribution information; only present when requested via
    /// `include_fields`.
    pub attribution: Option<Attribution>,
    /// Averaging period information; only present when requested via
    /// `include_fields`.
    pub averaging_period: Option<AveragingPeriod>,
}

/// Attribution information for a measurement.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribution {
    /// The name to attribute the measurement to.
    pub name: String,
    /// A link to the homepage of the source.
    pub url: Option<Url>,
}

/// The averaging period for a measurement.
#[derive(Debug, Clone, Deserialize)]
pub struct AveragingPeriod {
    /// The length of the period.
    pub value: f64,
    /// The unit the period is expressed in.
    pub unit: String,
}

/// A measured parameter listed by the OpenAQ platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The id of the parameter.
    pub id: String,
    /// The name of the parameter.
    pub name: String,
    /// A description of the parameter.
    pub description: String,
    /// The parameter's preferred unit.
    pub preferred_unit: String,
}

/// A data source used to populate the OpenAQ platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// The actual data source URL.
    pub url: Url,
    /// The name of the adapter that collects data from the source.
    pub adapter: String,
    /// The name of the source.
    pub name: String,
    /// The city where the data is gathered.
    pub city: Option<String>,
    /// The two-letter ISO code of the country where the data is gathered.
    pub country: String,
    /// A description of the data source.
    pub description: String,
    /// A URL about the source.
    #[serde(rename = "sourceURL")]
    pub source_url: Url,
    /// Addresses for inquiries about the source.
    pub contacts: Vec<String>,
    /// Whether the source is in use at this time.
    pub active: bool,
}

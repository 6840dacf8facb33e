//! Typed query parameters for each OpenAQ resource.
//!
//! Every resource takes its own parameter set, a plain struct of optional
//! fields constructed with `Default` and filled in as needed:
//!
//! ```
//! use openaq::params::{CitiesParameters, CitiesOrderBy, SortOrder};
//!
//! let params = CitiesParameters {
//!     country: Some("US".to_string()),
//!     order_by: Some(CitiesOrderBy::Count),
//!     sort: Some(SortOrder::Descending),
//!     limit: Some(20),
//!     ..Default::default()
//! };
//! ```
//!
//! [`QueryParameters::query_pairs`] turns a parameter set into the ordered
//! `(key, value)` pairs that become the request's query string. Absent
//! fields contribute nothing; pair order follows field declaration order,
//! so encoding the same instance twice yields identical output.

use chrono::{DateTime, Utc};

use crate::datetime;
use crate::model::{AirQualityParameter, Coordinate};

/// Encodes a parameter set as ordered query pairs.
///
/// Keys are the documented external parameter names (snake_case for
/// multi-word keys, e.g. `order_by`); values are the wire tokens: plain
/// `Display` output for scalars, `"lat,lon"` for coordinates, the canonical
/// [`crate::datetime`] format for dates, and comma-joined tokens for list
/// fields.
pub trait QueryParameters {
    /// Returns the `(key, value)` pairs for every present field, in field
    /// declaration order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// The direction results are sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort results in ascending order.
    Ascending,
    /// Sort results in descending order.
    Descending,
}

impl SortOrder {
    /// The token used for this sort order on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// The format measurement results are returned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

/// Extra measurement fields that can be requested beyond the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeField {
    Attribution,
    AveragingPeriod,
    SourceName,
}

impl IncludeField {
    pub fn as_str(self) -> &'static str {
        match self {
            IncludeField::Attribution => "attribution",
            IncludeField::AveragingPeriod => "averagingPeriod",
            IncludeField::SourceName => "sourceName",
        }
    }
}

fn join_fields(fields: &[IncludeField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parameters for fetching the listing of cities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitiesParameters {
    /// The country to limit results by.
    pub country: Option<String>,
    /// The field to order results by.
    pub order_by: Option<CitiesOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
    /// The maximum number of results to return.
    pub limit: Option<u32>,
    /// The page of results to return.
    pub page: Option<u32>,
}

/// The fields a cities listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitiesOrderBy {
    City,
    Country,
    Count,
    Locations,
}

impl CitiesOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            CitiesOrderBy::City => "city",
            CitiesOrderBy::Country => "country",
            CitiesOrderBy::Count => "count",
            CitiesOrderBy::Locations => "locations",
        }
    }
}

impl QueryParameters for CitiesParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Parameters for fetching the listing of countries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountriesParameters {
    /// The field to order results by.
    pub order_by: Option<CountriesOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
    /// The maximum number of results to return.
    pub limit: Option<u32>,
    /// The page of results to return.
    pub page: Option<u32>,
}

/// The fields a countries listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountriesOrderBy {
    /// Order by the two-letter ISO code.
    IsoCode,
    Name,
    Count,
    Cities,
    Locations,
}

impl CountriesOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            CountriesOrderBy::IsoCode => "code",
            CountriesOrderBy::Name => "name",
            CountriesOrderBy::Count => "count",
            CountriesOrderBy::Cities => "cities",
            CountriesOrderBy::Locations => "locations",
        }
    }
}

impl QueryParameters for CountriesParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Parameters for listing the fetch operations that populate the platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchesParameters {
    /// The field to order results by.
    pub order_by: Option<FetchesOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
    /// The maximum number of results to return.
    pub limit: Option<u32>,
    /// The page of results to return.
    pub page: Option<u32>,
}

/// The fields a fetches listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchesOrderBy {
    TimeStarted,
    TimeEnded,
    Count,
}

impl FetchesOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchesOrderBy::TimeStarted => "timeStarted",
            FetchesOrderBy::TimeEnded => "timeEnded",
            FetchesOrderBy::Count => "count",
        }
    }
}

impl QueryParameters for FetchesParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Parameters for fetching the latest value of each parameter per location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestParameters {
    /// The city to limit results by.
    pub city: Option<String>,
    /// The country to limit results by.
    pub country: Option<String>,
    /// The location to limit results by.
    pub location: Option<String>,
    /// Limit results to a single measured parameter.
    pub parameter: Option<AirQualityParameter>,
    /// Whether to filter out results without geographic information.
    pub has_geo: Option<bool>,
    /// Center point for area queries. Must be used with `radius`.
    pub coordinates: Option<Coordinate>,
    /// Radius in meters for area queries. Must be used with `coordinates`.
    pub radius: Option<u32>,
    /// The field to order results by.
    pub order_by: Option<LatestOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
    /// The maximum number of results to return.
    pub limit: Option<u32>,
    /// The page of results to return.
    pub page: Option<u32>,
}

/// The fields a latest listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatestOrderBy {
    Location,
    Country,
    City,
    Measurements,
    Distance,
}

impl LatestOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            LatestOrderBy::Location => "location",
            LatestOrderBy::Country => "country",
            LatestOrderBy::City => "city",
            LatestOrderBy::Measurements => "measurements",
            LatestOrderBy::Distance => "distance",
        }
    }
}

impl QueryParameters for LatestParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(parameter) = self.parameter {
            pairs.push(("parameter", parameter.as_str().to_string()));
        }
        if let Some(has_geo) = self.has_geo {
            pairs.push(("has_geo", has_geo.to_string()));
        }
        if let Some(coordinates) = self.coordinates {
            pairs.push(("coordinates", coordinates.to_string()));
        }
        if let Some(radius) = self.radius {
            pairs.push(("radius", radius.to_string()));
        }
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Parameters for fetching the air monitoring locations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationsParameters {
    /// The city to limit results by.
    pub city: Option<String>,
    /// The country to limit results by.
    pub country: Option<String>,
    /// The location to limit results by.
    pub location: Option<String>,
    /// Limit results to a single measured parameter.
    pub parameter: Option<AirQualityParameter>,
    /// Whether to filter out results without geographic information.
    pub has_geo: Option<bool>,
    /// Center point for area queries. Must be used with `radius`.
    pub coordinates: Option<Coordinate>,
    /// Radius in meters for area queries. Must be used with `coordinates`.
    pub radius: Option<u32>,
    /// The field to order results by.
    pub order_by: Option<LocationsOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
    /// The maximum number of results to return.
    pub limit: Option<u32>,
    /// The page of results to return.
    pub page: Option<u32>,
}

/// The fields a locations listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationsOrderBy {
    Location,
    Country,
    City,
    Count,
    Distance,
    SourceName,
    SourceNames,
    FirstUpdated,
    LastUpdated,
    Parameters,
    Coordinates,
}

impl LocationsOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationsOrderBy::Location => "location",
            LocationsOrderBy::Country => "country",
            LocationsOrderBy::City => "city",
            LocationsOrderBy::Count => "count",
            LocationsOrderBy::Distance => "distance",
            LocationsOrderBy::SourceName => "sourceName",
            LocationsOrderBy::SourceNames => "sourceNames",
            LocationsOrderBy::FirstUpdated => "firstUpdated",
            LocationsOrderBy::LastUpdated => "lastUpdated",
            LocationsOrderBy::Parameters => "parameters",
            LocationsOrderBy::Coordinates => "coordinates",
        }
    }
}

impl QueryParameters for LocationsParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(parameter) = self.parameter {
            pairs.push(("parameter", parameter.as_str().to_string()));
        }
        if let Some(has_geo) = self.has_geo {
            pairs.push(("has_geo", has_geo.to_string()));
        }
        if let Some(coordinates) = self.coordinates {
            pairs.push(("coordinates", coordinates.to_string()));
        }
        if let Some(radius) = self.radius {
            pairs.push(("radius", radius.to_string()));
        }
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Parameters for fetching individual measurements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementsParameters {
    /// The country to limit results by.
    pub country: Option<String>,
    /// The city to limit results by.
    pub city: Option<String>,
    /// The location to limit results by.
    pub location: Option<String>,
    /// Limit results to a single measured parameter.
    pub parameter: Option<AirQualityParameter>,
    /// Whether to filter out results without geographic information.
    pub has_geo: Option<bool>,
    /// Center point for area queries. Must be used with `radius`.
    pub coordinates: Option<Coordinate>,
    /// Radius in meters for area queries. Must be used with `coordinates`.
    pub radius: Option<u32>,
    /// Only show results above this value. Should be used with `parameter`.
    pub value_from: Option<f64>,
    /// Only show results below this value. Should be used with `parameter`.
    pub value_to: Option<f64>,
    /// Only show results after this instant.
    pub date_from: Option<DateTime<Utc>>,
    /// Only show results before this instant.
    pub date_to: Option<DateTime<Utc>>,
    /// The field to order results by.
    pub order_by: Option<MeasurementsOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
    /// Extra fields to include beyond the defaults, encoded as one
    /// comma-joined value.
    pub include_fields: Option<Vec<IncludeField>>,
    /// The maximum number of results to return.
    pub limit: Option<u32>,
    /// The page of results to return.
    pub page: Option<u32>,
    /// The format to return results in.
    pub format: Option<Format>,
}

/// The fields a measurements listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementsOrderBy {
    Date,
    Parameter,
    Value,
    Unit,
    Location,
    Country,
    City,
    Coordinates,
    SourceName,
}

impl MeasurementsOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementsOrderBy::Date => "date",
            MeasurementsOrderBy::Parameter => "parameter",
            MeasurementsOrderBy::Value => "value",
            MeasurementsOrderBy::Unit => "unit",
            MeasurementsOrderBy::Location => "location",
            MeasurementsOrderBy::Country => "country",
            MeasurementsOrderBy::City => "city",
            MeasurementsOrderBy::Coordinates => "coordinates",
            MeasurementsOrderBy::SourceName => "sourceName",
        }
    }
}

impl QueryParameters for MeasurementsParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(parameter) = self.parameter {
            pairs.push(("parameter", parameter.as_str().to_string()));
        }
        if let Some(has_geo) = self.has_geo {
            pairs.push(("has_geo", has_geo.to_string()));
        }
        if let Some(coordinates) = self.coordinates {
            pairs.push(("coordinates", coordinates.to_string()));
        }
        if let Some(radius) = self.radius {
            pairs.push(("radius", radius.to_string()));
        }
        if let Some(value_from) = self.value_from {
            pairs.push(("value_from", value_from.to_string()));
        }
        if let Some(value_to) = self.value_to {
            pairs.push(("value_to", value_to.to_string()));
        }
        if let Some(date_from) = &self.date_from {
            pairs.push(("date_from", datetime::format(date_from)));
        }
        if let Some(date_to) = &self.date_to {
            pairs.push(("date_to", datetime::format(date_to)));
        }
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(include_fields) = &self.include_fields {
            pairs.push(("include_fields", join_fields(include_fields)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(format) = self.format {
            pairs.push(("format", format.as_str().to_string()));
        }
        pairs
    }
}

/// Parameters for fetching the listing of measured parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterParameters {
    /// The field to order results by.
    pub order_by: Option<ParametersOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
}

/// The fields a parameters listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametersOrderBy {
    Id,
    Name,
    Description,
    PreferredUnit,
}

impl ParametersOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            ParametersOrderBy::Id => "id",
            ParametersOrderBy::Name => "name",
            ParametersOrderBy::Description => "description",
            ParametersOrderBy::PreferredUnit => "preferredUnit",
        }
    }
}

impl QueryParameters for ParameterParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        pairs
    }
}

/// Parameters for fetching the listing of data sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcesParameters {
    /// The field to order results by.
    pub order_by: Option<SourcesOrderBy>,
    /// The direction to sort results in.
    pub sort: Option<SortOrder>,
    /// The maximum number of results to return.
    pub limit: Option<u32>,
    /// The page of results to return.
    pub page: Option<u32>,
}

/// The fields a sources listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcesOrderBy {
    Url,
    Adapter,
    Name,
    City,
    Country,
    Description,
    Resolution,
    SourceUrl,
    Contacts,
    Active,
}

impl SourcesOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SourcesOrderBy::Url => "url",
            SourcesOrderBy::Adapter => "adapter",
            SourcesOrderBy::Name => "name",
            SourcesOrderBy::City => "city",
            SourcesOrderBy::Country => "country",
            SourcesOrderBy::Description => "description",
            SourcesOrderBy::Resolution => "resolution",
            SourcesOrderBy::SourceUrl => "sourceURL",
            SourcesOrderBy::Contacts => "contacts",
            SourcesOrderBy::Active => "active",
        }
    }
}

impl QueryParameters for SourcesParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_by) = self.order_by {
            pairs.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn absent_fields_encode_to_nothing() {
        assert!(CitiesParameters::default().query_pairs().is_empty());
        assert!(MeasurementsParameters::default().query_pairs().is_empty());
        assert!(ParameterParameters::default().query_pairs().is_empty());
    }

    #[test]
    fn pairs_follow_declaration_order() {
        let params = CitiesParameters {
            country: Some("NL".to_string()),
            order_by: Some(CitiesOrderBy::Locations),
            sort: Some(SortOrder::Ascending),
            limit: Some(5),
            page: Some(2),
        };
        let keys: Vec<_> = params.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["country", "order_by", "sort", "limit", "page"]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let params = MeasurementsParameters {
            country: Some("IN".to_string()),
            parameter: Some(AirQualityParameter::Pm25),
            has_geo: Some(true),
            coordinates: Some(Coordinate {
                latitude: 40.7128,
                longitude: -74.0060,
            }),
            limit: Some(100),
            ..Default::default()
        };
        assert_eq!(params.query_pairs(), params.query_pairs());
    }

    #[test]
    fn sort_order_uses_external_tokens() {
        let params = CountriesParameters {
            sort: Some(SortOrder::Descending),
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![("sort", "desc".to_string())]
        );
        assert_eq!(SortOrder::Ascending.as_str(), "asc");
    }

    #[test]
    fn coordinates_encode_as_one_comma_joined_value() {
        let params = LatestParameters {
            coordinates: Some(Coordinate {
                latitude: 40.7128,
                longitude: -74.0060,
            }),
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![("coordinates", "40.7128,-74.006".to_string())]
        );
    }

    #[test]
    fn dates_encode_with_the_canonical_format() {
        let date_from = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
        let params = MeasurementsParameters {
            date_from: Some(date_from),
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![("date_from", "2018-01-01T00:00:00.000Z".to_string())]
        );
    }

    #[test]
    fn include_fields_are_comma_joined() {
        let params = MeasurementsParameters {
            include_fields: Some(vec![
                IncludeField::Attribution,
                IncludeField::AveragingPeriod,
                IncludeField::SourceName,
            ]),
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![(
                "include_fields",
                "attribution,averagingPeriod,sourceName".to_string()
            )]
        );
    }

    #[test]
    fn order_by_tokens_differ_from_variant_names_where_documented() {
        assert_eq!(CountriesOrderBy::IsoCode.as_str(), "code");
        assert_eq!(FetchesOrderBy::TimeStarted.as_str(), "timeStarted");
        assert_eq!(SourcesOrderBy::SourceUrl.as_str(), "sourceURL");
        assert_eq!(ParametersOrderBy::PreferredUnit.as_str(), "preferredUnit");
    }
}

//! Endpoint descriptors and request construction.
//!
//! [`Endpoint`] is the closed set of OpenAQ resources, one variant per
//! resource, each carrying its typed parameter set. An endpoint resolves to
//! an [`ApiRequest`] — the fixed host, the versioned path, the variant's
//! method, and the encoded query string.

use http::Method;
use url::Url;

use crate::error::Result;
use crate::params::{
    CitiesParameters, CountriesParameters, FetchesParameters, LatestParameters,
    LocationsParameters, MeasurementsParameters, ParameterParameters, QueryParameters,
    SourcesParameters,
};

/// The base host every request is made against.
const BASE_URL: &str = "https://api.openaq.org";

/// The API version. Formatted with `Display`, so a whole number yields a
/// bare `v1` path segment.
const VERSION: f32 = 1.0;

/// A fully resolved request description: everything the transport needs to
/// execute the call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// The HTTP method.
    pub method: Method,
    /// The complete URL, query string included.
    pub url: Url,
}

/// The endpoints that belong to OpenAQ.
///
/// # Examples
///
/// ```
/// use openaq::{params::CitiesParameters, Endpoint};
///
/// let endpoint = Endpoint::Cities(CitiesParameters {
///     country: Some("US".to_string()),
///     ..Default::default()
/// });
/// let request = endpoint.to_request().unwrap();
///
/// assert_eq!(request.method, http::Method::GET);
/// assert_eq!(
///     request.url.as_str(),
///     "https://api.openaq.org/v1/cities?country=US"
/// );
/// ```
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// A simple listing of cities.
    Cities(CitiesParameters),
    /// A simple listing of countries.
    Countries(CountriesParameters),
    /// The fetch operations used to populate the platform.
    Fetches(FetchesParameters),
    /// The latest value of each parameter per location.
    Latest(LatestParameters),
    /// The air monitoring locations.
    Locations(LocationsParameters),
    /// Individual measurements.
    Measurements(MeasurementsParameters),
    /// A simple listing of the measured parameters.
    Parameters(ParameterParameters),
    /// The data sources used to populate the platform.
    Sources(SourcesParameters),
}

impl Endpoint {
    /// The fixed path segment for this resource.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Cities(_) => "cities",
            Endpoint::Countries(_) => "countries",
            Endpoint::Fetches(_) => "fetches",
            Endpoint::Latest(_) => "latest",
            Endpoint::Locations(_) => "locations",
            Endpoint::Measurements(_) => "measurements",
            Endpoint::Parameters(_) => "parameters",
            Endpoint::Sources(_) => "sources",
        }
    }

    /// The HTTP method for this resource.
    ///
    /// Every current variant is a GET; the per-variant match keeps room for
    /// future variants with other methods.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Cities(_)
            | Endpoint::Countries(_)
            | Endpoint::Fetches(_)
            | Endpoint::Latest(_)
            | Endpoint::Locations(_)
            | Endpoint::Measurements(_)
            | Endpoint::Parameters(_)
            | Endpoint::Sources(_) => Method::GET,
        }
    }

    /// The encoded query pairs of this endpoint's parameter set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Cities(params) => params.query_pairs(),
            Endpoint::Countries(params) => params.query_pairs(),
            Endpoint::Fetches(params) => params.query_pairs(),
            Endpoint::Latest(params) => params.query_pairs(),
            Endpoint::Locations(params) => params.query_pairs(),
            Endpoint::Measurements(params) => params.query_pairs(),
            Endpoint::Parameters(params) => params.query_pairs(),
            Endpoint::Sources(params) => params.query_pairs(),
        }
    }

    /// Resolves this endpoint to a request.
    ///
    /// The path is `<base>/v<version>/<resource>`; query pairs are appended
    /// only when at least one parameter is present, so an all-absent
    /// parameter set produces a URL with no `?`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Construction`] if the URL cannot be built —
    /// unreachable with the fixed constants, but never a partial request.
    pub fn to_request(&self) -> Result<ApiRequest> {
        let mut url = Url::parse(BASE_URL)?;
        url.set_path(&format!("v{}/{}", VERSION, self.path()));

        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }

        Ok(ApiRequest {
            method: self.method(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;
    use crate::params::SortOrder;

    #[test]
    fn empty_parameters_build_a_url_without_query() {
        let request = Endpoint::Countries(CountriesParameters::default())
            .to_request()
            .unwrap();
        assert_eq!(request.url.as_str(), "https://api.openaq.org/v1/countries");
        assert_eq!(request.url.query(), None);
    }

    #[test]
    fn version_segment_drops_the_trailing_zero() {
        let request = Endpoint::Cities(CitiesParameters::default())
            .to_request()
            .unwrap();
        assert!(request.url.path().starts_with("/v1/"));
    }

    #[test]
    fn every_variant_resolves_to_its_own_path() {
        let cases: Vec<(Endpoint, &str)> = vec![
            (Endpoint::Cities(Default::default()), "/v1/cities"),
            (Endpoint::Countries(Default::default()), "/v1/countries"),
            (Endpoint::Fetches(Default::default()), "/v1/fetches"),
            (Endpoint::Latest(Default::default()), "/v1/latest"),
            (Endpoint::Locations(Default::default()), "/v1/locations"),
            (
                Endpoint::Measurements(Default::default()),
                "/v1/measurements",
            ),
            (Endpoint::Parameters(Default::default()), "/v1/parameters"),
            (Endpoint::Sources(Default::default()), "/v1/sources"),
        ];
        for (endpoint, path) in cases {
            let request = endpoint.to_request().unwrap();
            assert_eq!(request.url.path(), path);
            assert_eq!(request.method, Method::GET);
        }
    }

    #[test]
    fn query_pairs_are_url_encoded_in_order() {
        let request = Endpoint::Latest(LatestParameters {
            city: Some("São Paulo".to_string()),
            coordinates: Some(Coordinate {
                latitude: 40.7128,
                longitude: -74.0060,
            }),
            sort: Some(SortOrder::Descending),
            ..Default::default()
        })
        .to_request()
        .unwrap();
        assert_eq!(
            request.url.query(),
            Some("city=S%C3%A3o+Paulo&coordinates=40.7128%2C-74.006&sort=desc")
        );
    }

    #[test]
    fn building_twice_yields_identical_urls() {
        let endpoint = Endpoint::Measurements(MeasurementsParameters {
            country: Some("GB".to_string()),
            limit: Some(50),
            ..Default::default()
        });
        assert_eq!(
            endpoint.to_request().unwrap().url,
            endpoint.to_request().unwrap().url
        );
    }
}

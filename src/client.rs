//! The OpenAQ client façade.
//!
//! [`Client`] exposes one async method per resource. Each call resolves its
//! endpoint to a request, hands the request to the transport, and decodes
//! whatever comes back. The client holds no per-call state: a single
//! instance is safe to share across concurrent calls, and
//! [`Client::shared`] offers a process-wide instance for convenience.

use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::model::{
    City, Country, Envelope, Fetch, Latest, Location, Measurement, Parameter, Source,
};
use crate::params::{
    CitiesParameters, CountriesParameters, FetchesParameters, LatestParameters,
    LocationsParameters, MeasurementsParameters, ParameterParameters, SourcesParameters,
};
use crate::response::decode_body;
use crate::transport::{HttpTransport, RawResponse, Transport};

/// A client for the OpenAQ API.
///
/// The client is designed to be reused: it is cheap to clone and carries no
/// state beyond its transport, so concurrent calls on one instance never
/// interfere with each other.
///
/// # Examples
///
/// ```no_run
/// use openaq::params::{CitiesParameters, SortOrder};
/// use openaq::Client;
///
/// # async fn example() -> Result<(), openaq::Error> {
/// let client = Client::new();
///
/// let cities = client
///     .cities(CitiesParameters {
///         country: Some("US".to_string()),
///         sort: Some(SortOrder::Descending),
///         limit: Some(10),
///         ..Default::default()
///     })
///     .await?;
///
/// for city in &cities.results {
///     println!("{}: {} measurements", city.name, city.measurement_count);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl Client {
    /// Creates a client with the default HTTP transport.
    ///
    /// Construction has no side effects; no connection is opened until the
    /// first call.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }

    /// Returns the process-wide shared client.
    ///
    /// A convenience for callers that do not want to thread a client
    /// through their code; constructing and sharing your own instance is
    /// equally valid.
    pub fn shared() -> &'static Client {
        static SHARED: OnceLock<Client> = OnceLock::new();
        SHARED.get_or_init(Client::new)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a custom [`Transport`].
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Fetches a listing of the cities supported by OpenAQ.
    pub async fn cities(&self, parameters: CitiesParameters) -> Result<Envelope<City>> {
        self.connect(Endpoint::Cities(parameters)).await
    }

    /// Fetches a listing of the countries supported by OpenAQ.
    pub async fn countries(&self, parameters: CountriesParameters) -> Result<Envelope<Country>> {
        self.connect(Endpoint::Countries(parameters)).await
    }

    /// Fetches the individual fetch operations used to populate the OpenAQ
    /// platform.
    pub async fn fetches(&self, parameters: FetchesParameters) -> Result<Envelope<Fetch>> {
        self.connect(Endpoint::Fetches(parameters)).await
    }

    /// Fetches the latest value of each measured parameter for each
    /// location.
    pub async fn latest(&self, parameters: LatestParameters) -> Result<Envelope<Latest>> {
        self.connect(Endpoint::Latest(parameters)).await
    }

    /// Fetches the air monitoring locations in the OpenAQ platform.
    pub async fn locations(&self, parameters: LocationsParameters) -> Result<Envelope<Location>> {
        self.connect(Endpoint::Locations(parameters)).await
    }

    /// Fetches data about individual measurements.
    pub async fn measurements(
        &self,
        parameters: MeasurementsParameters,
    ) -> Result<Envelope<Measurement>> {
        self.connect(Endpoint::Measurements(parameters)).await
    }

    /// Fetches a simple listing of the parameters measured by the OpenAQ
    /// platform.
    pub async fn parameters(&self, parameters: ParameterParameters) -> Result<Envelope<Parameter>> {
        self.connect(Endpoint::Parameters(parameters)).await
    }

    /// Fetches the data sources used to populate the OpenAQ platform.
    pub async fn sources(&self, parameters: SourcesParameters) -> Result<Envelope<Source>> {
        self.connect(Endpoint::Sources(parameters)).await
    }

    /// Resolves the endpoint, executes it, and decodes the response through
    /// the default two-path pipeline.
    async fn connect<D>(&self, endpoint: Endpoint) -> Result<D>
    where
        D: DeserializeOwned,
    {
        self.connect_with(endpoint, decode_body).await
    }

    /// Like the per-resource methods, but with a caller-supplied parsing
    /// function that fully replaces the default decode; its result is
    /// returned verbatim.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use openaq::params::MeasurementsParameters;
    /// use openaq::{Client, Endpoint, Error};
    ///
    /// # async fn example() -> Result<(), Error> {
    /// let client = Client::new();
    ///
    /// // Keep the body as unparsed text, e.g. for a CSV response.
    /// let body = client
    ///     .connect_with(
    ///         Endpoint::Measurements(MeasurementsParameters::default()),
    ///         |raw| match raw.body {
    ///             Some(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    ///             None => Err(raw.error.unwrap_or(Error::EmptyResponse)),
    ///         },
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect_with<D, F>(&self, endpoint: Endpoint, parse: F) -> Result<D>
    where
        F: FnOnce(RawResponse) -> Result<D>,
    {
        let request = endpoint.to_request()?;
        tracing::debug!(method = %request.method, url = %request.url, "Executing request");

        let response = self.transport.execute(request).await;
        if let Some(status) = response.status {
            tracing::debug!(status = status.as_u16(), "Received response");
        }

        match parse(response) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(error = %e, path = endpoint.path(), "Request failed");
                Err(e)
            }
        }
    }
}

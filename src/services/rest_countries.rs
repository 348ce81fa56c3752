use crate::config::Config;
use crate::models::country::RawCountryRecord;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RestCountriesError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Country not found: {0}")]
    NotFound(String),
    #[error("HTTP error {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// Thin client for the REST Countries v3.1 endpoints used by the detail view.
///
/// Every call is a single best-effort request: no retry, backoff or caching.
#[derive(Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: Url,
}

impl RestCountriesClient {
    pub fn new(base_url: &str) -> Result<Self, RestCountriesError> {
        Self::with_client(Client::builder().build()?, base_url)
    }

    pub fn from_config(config: &Config) -> Result<Self, RestCountriesError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, &config.rest_countries_url)
    }

    fn with_client(client: Client, base_url: &str) -> Result<Self, RestCountriesError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RestCountriesError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(RestCountriesError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base URL, percent-encoding each one so user
    /// input such as `#` or `?` stays inside its path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RestCountriesError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RestCountriesError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /name/{name}?fullText=true`. A non-success status or an empty
    /// match list is reported as [`RestCountriesError::NotFound`].
    pub async fn fetch_by_name(&self, name: &str) -> Result<RawCountryRecord, RestCountriesError> {
        let url = self.endpoint(&["name", name])?;
        debug!("Fetching country record: {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("fullText", "true")])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Country lookup for {} returned {}", name, response.status());
            return Err(RestCountriesError::NotFound(name.to_string()));
        }

        let records: Vec<RawCountryRecord> = response.json().await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| RestCountriesError::NotFound(name.to_string()))
    }

    /// `GET /alpha/{code}`, returning the first record of the response.
    pub async fn fetch_by_code(&self, code: &str) -> Result<RawCountryRecord, RestCountriesError> {
        let url = self.endpoint(&["alpha", code])?;
        debug!("Fetching border country: {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RestCountriesError::Status {
                status,
                url: url.to_string(),
            });
        }

        let records: Vec<RawCountryRecord> = response.json().await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| RestCountriesError::NotFound(code.to_string()))
    }

    /// Display name of the country identified by an alpha code.
    pub async fn fetch_country_name(&self, code: &str) -> Result<String, RestCountriesError> {
        Ok(self.fetch_by_code(code).await?.name.common)
    }
}

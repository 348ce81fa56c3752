use crate::models::country::RawCountryRecord;
use crate::models::view::{build_view_model, CountryViewModel};
use crate::services::borders::resolve_borders;
use crate::services::rest_countries::{RestCountriesClient, RestCountriesError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// What the detail screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryDetail {
    Loading,
    NotFound,
    Loaded(CountryViewModel),
}

/// Identifies one fetch: the country key it was started for and the
/// generation it was issued in. Updates carrying an outdated ticket are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Fetching(String),
}

struct DetailInner {
    generation: u64,
    fetch_state: FetchState,
    detail: CountryDetail,
    borders_applied: bool,
}

/// Owns the detail screen for one country at a time.
///
/// Starting a fetch for a new key supersedes whatever was in flight. The
/// superseded fetch is not cancelled; its record and border updates are
/// discarded when they arrive because their ticket no longer matches.
#[derive(Clone)]
pub struct CountryDetailController {
    client: RestCountriesClient,
    inner: Arc<Mutex<DetailInner>>,
}

impl CountryDetailController {
    pub fn new(client: RestCountriesClient) -> Self {
        Self {
            client,
            inner: Arc::new(Mutex::new(DetailInner {
                generation: 0,
                fetch_state: FetchState::Idle,
                detail: CountryDetail::Loading,
                borders_applied: false,
            })),
        }
    }

    /// Loads the country identified by `key`, using `prefetched` instead of
    /// the primary fetch when the caller already has the record.
    ///
    /// Returns the detail as computed for this key, even if a newer fetch
    /// superseded it in the meantime.
    pub async fn show(&self, key: &str, prefetched: Option<RawCountryRecord>) -> CountryDetail {
        self.show_with_record(key, prefetched).await.0
    }

    /// Like [`show`](Self::show), also handing back the record the detail was
    /// built from so the caller can reuse it without another primary fetch.
    pub async fn show_with_record(
        &self,
        key: &str,
        prefetched: Option<RawCountryRecord>,
    ) -> (CountryDetail, Option<RawCountryRecord>) {
        let ticket = self.begin(key).await;

        let record = match prefetched {
            Some(record) => record,
            None => match self.client.fetch_by_name(key).await {
                Ok(record) => record,
                Err(e) => {
                    match &e {
                        RestCountriesError::NotFound(_) => warn!("Country not found: {}", key),
                        _ => error!("Error fetching country data for {}: {}", key, e),
                    }
                    self.publish(&ticket, CountryDetail::NotFound).await;
                    self.settle(&ticket).await;
                    return (CountryDetail::NotFound, None);
                }
            },
        };

        let mut view = build_view_model(&record);
        self.publish(&ticket, CountryDetail::Loaded(view.clone()))
            .await;

        let codes = record.border_codes();
        if !codes.is_empty() {
            view.borders = resolve_borders(&self.client, codes).await;
            self.publish_borders(&ticket, view.borders.clone()).await;
        }

        self.settle(&ticket).await;
        (CountryDetail::Loaded(view), Some(record))
    }

    /// Starts a fetch for `key`, invalidating every earlier ticket.
    pub async fn begin(&self, key: &str) -> FetchTicket {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.fetch_state = FetchState::Fetching(key.to_string());
        inner.detail = CountryDetail::Loading;
        inner.borders_applied = false;

        debug!("Fetch {} started for {}", inner.generation, key);

        FetchTicket {
            key: key.to_string(),
            generation: inner.generation,
        }
    }

    /// Replaces the displayed detail. Returns `false` when the ticket is stale.
    pub async fn publish(&self, ticket: &FetchTicket, detail: CountryDetail) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != ticket.generation {
            debug!("Discarding stale country data for {}", ticket.key);
            return false;
        }
        inner.detail = detail;
        true
    }

    /// Sets the resolved border names on the displayed view model.
    ///
    /// Only the first update for a ticket lands; later ones, stale ones and
    /// ones arriving while no view model is displayed are rejected.
    pub async fn publish_borders(&self, ticket: &FetchTicket, borders: Vec<String>) -> bool {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;
        if inner.generation != ticket.generation {
            debug!("Discarding stale border countries for {}", ticket.key);
            return false;
        }
        if inner.borders_applied {
            return false;
        }
        match &mut inner.detail {
            CountryDetail::Loaded(view) => {
                view.borders = borders;
                inner.borders_applied = true;
                info!(
                    "Border countries updated for {}: {}",
                    ticket.key,
                    view.borders.len()
                );
                true
            }
            _ => false,
        }
    }

    /// Returns to `Idle` if `ticket` is still the active fetch.
    pub async fn settle(&self, ticket: &FetchTicket) {
        let mut inner = self.inner.lock().await;
        if inner.generation == ticket.generation {
            inner.fetch_state = FetchState::Idle;
        }
    }

    pub async fn current(&self) -> CountryDetail {
        self.inner.lock().await.detail.clone()
    }

    pub async fn fetch_state(&self) -> FetchState {
        self.inner.lock().await.fetch_state.clone()
    }
}

use std::{fmt, sync::Arc};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    decoder::decode, error::Error, holder::Holder, interfaces::Country, transport::Transport,
};

/// Fetches the countries list and publishes the outcome.
///
/// The pipeline exposes two holders: the last successfully fetched list (initially empty) and
/// the last error (initially `None`). A successful fetch only writes the list; a failed fetch
/// only writes the error.
///
/// Overlapping [`refresh`](Self::refresh) calls are neither de-duplicated nor cancelled. Each
/// writes its outcome when it resolves, so a slow older call that resolves after a newer one
/// overwrites the newer result.
#[derive(Clone)]
pub struct CountriesPipeline {
    transport: Arc<dyn Transport>,
    endpoint: String,
    countries: Holder<Vec<Country>>,
    error: Holder<Option<Arc<Error>>>,
}

impl CountriesPipeline {
    /// Creates a pipeline fetching from `endpoint` through `transport`.
    pub fn new(transport: Arc<dyn Transport>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            countries: Holder::default(),
            error: Holder::default(),
        }
    }

    /// The endpoint this pipeline fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The holder for the last successfully fetched list of countries.
    pub fn countries(&self) -> &Holder<Vec<Country>> {
        &self.countries
    }

    /// The holder for the last fetch error.
    pub fn error(&self) -> &Holder<Option<Arc<Error>>> {
        &self.error
    }

    /// Starts a refresh in a new task and returns immediately.
    ///
    /// The returned handle may be awaited to know when the outcome has been published, or
    /// dropped. Must be called from within a tokio runtime.
    pub fn refresh(&self) -> JoinHandle<()> {
        let pipeline = self.clone();

        tokio::spawn(async move {
            match pipeline.fetch_countries().await {
                Ok(countries) => {
                    info!("fetched {} countries", countries.len());
                    pipeline.countries.set(countries);
                }
                Err(e) => {
                    warn!("failed to refresh countries: {}", e);
                    pipeline.error.set(Some(Arc::new(e)));
                }
            }
        })
    }

    /// Fetches and decodes the countries list without touching the holders. An absent body
    /// yields an empty list.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>, Error> {
        debug!("fetching countries from {}", self.endpoint);

        let body = self.transport.fetch(&self.endpoint).await?;
        Ok(decode(body.as_deref())?.unwrap_or_default())
    }
}

impl fmt::Debug for CountriesPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountriesPipeline")
            .field("endpoint", &self.endpoint)
            .field("countries", &self.countries)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

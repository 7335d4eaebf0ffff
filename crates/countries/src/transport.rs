use async_trait::async_trait;
use atlas_common::utils::http::{build_client, get_bytes_from_url};
use bytes::Bytes;
use reqwest::Client;

use crate::error::Error;

/// Performs the network I/O for the countries pipeline.
///
/// Implementations return the raw response body, `None` when there is no body, or
/// [`Error::TransportError`] when the request fails.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the body at `url`.
    async fn fetch(&self, url: &str) -> Result<Option<Bytes>, Error>;
}

/// A [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport whose requests time out after `timeout` seconds.
    pub fn new(timeout: u64) -> Result<Self, Error> {
        let client = build_client(timeout)
            .map_err(|e| Error::TransportError(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Option<Bytes>, Error> {
        get_bytes_from_url(&self.client, url)
            .await
            .map_err(|e| Error::TransportError(e.to_string()))
    }
}

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

static APP_USER_AGENT: &str = concat!("atlas/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client with the atlas user agent and the given timeout (in seconds).
///
/// ```no_run
/// use atlas_common::utils::http::build_client;
///
/// let client = build_client(10).expect("failed to build client");
/// ```
pub fn build_client(timeout: u64) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(APP_USER_AGENT).timeout(Duration::from_secs(timeout)).build()
}

/// Make a GET request to the target URL and return the raw response body.
///
/// Non-2xx statuses are returned as errors. An empty body is returned as `None`.
///
/// ```no_run
/// use atlas_common::utils::http::{build_client, get_bytes_from_url};
///
/// let client = build_client(10).expect("failed to build client");
/// // get_bytes_from_url(&client, "https://example.com").await;
/// ```
pub async fn get_bytes_from_url(
    client: &Client,
    url: &str,
) -> Result<Option<Bytes>, reqwest::Error> {
    trace!("GET {}", url);

    let res = match client.get(url).send().await {
        Ok(res) => {
            trace!("GET {}: {}", url, res.status());
            res
        }
        Err(e) => {
            trace!("GET {}: {:?}", url, e);
            return Err(e);
        }
    };

    let body = res.error_for_status()?.bytes().await?;
    trace!("GET {}: read {} bytes", url, body.len());

    if body.is_empty() {
        return Ok(None);
    }

    Ok(Some(body))
}

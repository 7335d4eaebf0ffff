use std::{sync::Arc, time::Instant};

use atlas_common::constants::{DEFAULT_COUNTRIES_URL, DEFAULT_TIMEOUT};
use colored::Colorize;
use eyre::eyre;
use tracing::{debug, info, warn};

use crate::{
    error::Error,
    interfaces::{find_by_code, search, CountriesArgs, Country},
    pipeline::CountriesPipeline,
    transport::HttpTransport,
};

#[derive(Debug, Clone)]
/// Result of a successful countries operation
///
/// Contains the fetched countries that matched the requested filters, in endpoint order.
pub struct CountriesResult {
    /// The matching countries
    pub countries: Vec<Country>,
}

impl CountriesResult {
    /// Prints one line per country to stdout
    pub fn display(&self) {
        if self.countries.is_empty() {
            warn!("no countries matched");
            return;
        }

        for country in &self.countries {
            println!("{} {}", format!("[{}]", country.alpha3_code).bold().bright_white(), country);
        }
    }

    /// Serializes the countries to pretty JSON, using the endpoint's field names
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(&self.countries)
            .map_err(|e| Error::Eyre(eyre!("failed to serialize countries: {e}")))
    }
}

/// Fetches the list of countries and applies the `search` and `code` filters from `args`.
///
/// An empty `url` falls back to the default endpoint and a missing `timeout` to the default
/// timeout. An absent response body yields an empty result.
pub async fn countries(args: CountriesArgs) -> Result<CountriesResult, Error> {
    let start_time = Instant::now();

    let timeout = args.timeout.unwrap_or(DEFAULT_TIMEOUT);
    if timeout == 0 {
        return Err(Error::Eyre(eyre!("timeout must be at least one second")));
    }

    let url = if args.url.is_empty() { DEFAULT_COUNTRIES_URL.to_string() } else { args.url };
    let transport = HttpTransport::new(timeout)?;
    let pipeline = CountriesPipeline::new(Arc::new(transport), url);

    let fetched = pipeline.fetch_countries().await?;
    debug!("fetching {} countries took {:?}", fetched.len(), start_time.elapsed());

    let countries = filter_countries(&fetched, &args.search, args.code.as_deref());

    info!("{} of {} countries matched", countries.len(), fetched.len());
    Ok(CountriesResult { countries })
}

/// Narrows `countries` down to the name matches of `query`. With a `code`, only the first
/// country carrying that code is kept, and only if it also matches `query`.
fn filter_countries(countries: &[Country], query: &str, code: Option<&str>) -> Vec<Country> {
    match code {
        Some(code) => find_by_code(countries, code)
            .filter(|country| country.matches(query))
            .into_iter()
            .cloned()
            .collect(),
        None => search(countries, query).into_iter().cloned().collect(),
    }
}

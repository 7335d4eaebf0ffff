//! The Countries module fetches the list of countries from a REST endpoint, decodes it into typed
//! records and publishes the outcome through observable holders.

/// Error types for the countries module
pub mod error;

mod core;
mod decoder;
mod holder;
mod interfaces;
mod pipeline;
mod transport;

// re-export the public interface
pub use core::{countries, CountriesResult};
pub use decoder::decode;
pub use error::Error;
pub use holder::Holder;
pub use interfaces::{
    find_by_code, search, CountriesArgs, CountriesArgsBuilder, Country, Currency, Language,
};
pub use pipeline::CountriesPipeline;
pub use transport::{HttpTransport, Transport};

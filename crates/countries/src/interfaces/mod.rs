mod args;
mod country;

// re-export the public interface
pub use args::{CountriesArgs, CountriesArgsBuilder};
pub use country::{find_by_code, search, Country, Currency, Language};

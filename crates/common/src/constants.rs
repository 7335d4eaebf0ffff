/// The default countries endpoint. Returns a JSON array with one object per country, restricted
/// to the fields atlas decodes.
///
/// Every field is required when decoding. If the endpoint serves a record without a `capital`
/// or `currencies` entry (some territories have neither), the whole response fails to decode;
/// point `countries_url` or `--url` at an endpoint whose records are complete.
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v2/all?fields=name,alpha2Code,alpha3Code,capital,region,population,currencies,languages";

/// The default request timeout, in seconds.
pub const DEFAULT_TIMEOUT: u64 = 10;

/// The directory under `$HOME` where atlas keeps its configuration.
pub const CONFIG_DIR: &str = ".atlas";

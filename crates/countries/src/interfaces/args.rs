use clap::Parser;
use derive_builder::Builder;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Fetch and display the list of countries",
    override_usage = "atlas countries [OPTIONS]"
)]
/// Arguments for the countries operation
///
/// This struct contains the parameters needed to fetch the list of countries
/// and narrow it down for display.
pub struct CountriesArgs {
    /// The countries endpoint to fetch from. Defaults to the configured `countries_url`.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub url: String,

    /// The request timeout in seconds. Defaults to the configured `timeout`.
    #[clap(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Only keep countries whose name contains this text (case-insensitive).
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub search: String,

    /// Only keep the country with this alpha-2 or alpha-3 code.
    #[clap(long, short)]
    pub code: Option<String>,

    /// Whether to output the countries as JSON.
    #[clap(long, short)]
    pub json: bool,

    /// The output directory to write the output to or 'print' to print to the console
    #[clap(long = "output", short, default_value = "print", hide_default_value = true)]
    pub output: String,
}

impl CountriesArgsBuilder {
    /// Creates a new CountriesArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            url: Some(String::new()),
            timeout: Some(None),
            search: Some(String::new()),
            code: Some(None),
            json: Some(false),
            output: Some(String::from("print")),
        }
    }
}

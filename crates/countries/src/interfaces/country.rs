use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single country as served by the countries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// The common name of the country
    pub name: String,
    /// The ISO 3166-1 alpha-2 code
    pub alpha2_code: String,
    /// The ISO 3166-1 alpha-3 code
    pub alpha3_code: String,
    /// The capital city
    pub capital: String,
    /// The region the country belongs to
    pub region: String,
    /// The population count
    pub population: u64,
    /// Currencies in use, in source order
    pub currencies: Vec<Currency>,
    /// Languages spoken, in source order
    pub languages: Vec<Language>,
}

/// A currency in use by a [`Country`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// The ISO 4217 code
    pub code: String,
    /// The display name
    pub name: String,
    /// The currency symbol
    pub symbol: String,
}

/// A language spoken in a [`Country`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// The English name
    pub name: String,
    /// The name in the language itself
    pub native_name: String,
}

impl Country {
    /// Whether the country's name contains `query`, ignoring case. A blank query matches every
    /// country.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Whether `code` is this country's alpha-2 or alpha-3 code, ignoring case.
    pub fn has_code(&self, code: &str) -> bool {
        let code = code.trim();
        self.alpha2_code.eq_ignore_ascii_case(code) || self.alpha3_code.eq_ignore_ascii_case(code)
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}  {}  {}", self.name, self.region, self.alpha2_code, self.capital)
    }
}

/// Returns the countries whose name contains `query`, in their original order.
pub fn search<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    countries.iter().filter(|country| country.matches(query)).collect()
}

/// Returns the first country with the given alpha-2 or alpha-3 code.
pub fn find_by_code<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    countries.iter().find(|country| country.has_code(code))
}

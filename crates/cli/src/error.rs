#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("Countries error: {0}")]
    CountriesError(#[from] atlas_countries::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] atlas_config::error::Error),
}

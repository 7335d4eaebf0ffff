/// Error type for the countries module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport failed: network unreachable, timeout, or a non-2xx status
    #[error("Transport error: {0}")]
    TransportError(String),
    /// The response body was not a JSON array of countries
    #[error("Decode error: failed to decode countries")]
    DecodeError,
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}

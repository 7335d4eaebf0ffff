use tracing::{debug, trace};

use crate::{error::Error, interfaces::Country};

/// Decodes a response body into a list of [`Country`].
///
/// An absent body is not an error and decodes to `None`. A body that is not a JSON array of
/// countries fails with [`Error::DecodeError`]; the underlying reason is only logged. Unknown
/// fields are ignored, missing fields are not.
///
/// ```
/// use atlas_countries::decode;
///
/// assert!(decode(None).expect("absent body is valid").is_none());
/// assert_eq!(decode(Some("[]".as_bytes())).expect("empty array is valid"), Some(vec![]));
/// assert!(decode(Some("Invalid JSON".as_bytes())).is_err());
/// ```
pub fn decode(body: Option<&[u8]>) -> Result<Option<Vec<Country>>, Error> {
    let Some(body) = body else {
        trace!("no body to decode");
        return Ok(None);
    };

    let countries = serde_json::from_slice::<Vec<Country>>(body).map_err(|e| {
        debug!("failed to decode {} byte body: {}", body.len(), e);
        Error::DecodeError
    })?;

    trace!("decoded {} countries", countries.len());
    Ok(Some(countries))
}

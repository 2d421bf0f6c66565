use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid href url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("href has no usable host: {0}")]
    NoHost(String),
}

/// Derive the stable identifier for a logo from its `href`.
///
/// The identifier is the first dot-separated label of the host, skipping a
/// leading `www`: `https://www.example.com` and `https://example.com` both
/// yield `example`.
pub fn logo_id(href: &str) -> Result<String, IdentityError> {
    let parsed = Url::parse(href)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| IdentityError::NoHost(href.to_string()))?;

    let mut labels = host.split('.').filter(|label| !label.is_empty());
    let id = match labels.next() {
        Some("www") => labels.next(),
        first => first,
    };

    match id {
        Some(id) => Ok(id.to_string()),
        None => Err(IdentityError::NoHost(href.to_string())),
    }
}

/// Canonical output file name for an identifier.
pub fn logo_filename(id: &str) -> String {
    format!("{id}.jpg")
}

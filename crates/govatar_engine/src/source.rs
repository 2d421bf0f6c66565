use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("invalid source url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("source url has no file name: {0}")]
    NoFileName(String),
    #[error("source file name is not valid utf-8 after percent-decoding: {0}")]
    InvalidEncoding(String),
}

/// File name referenced by a `src` URL: the last path segment, percent-decoded.
///
/// The loader resolves this against the local images directory; the rest of
/// the URL is ignored.
pub fn source_filename(src: &str) -> Result<String, SourceError> {
    let parsed = Url::parse(src)?;
    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| SourceError::NoFileName(src.to_string()))?;

    let decoded = percent_decode_str(segment)
        .decode_utf8()
        .map_err(|_| SourceError::InvalidEncoding(segment.to_string()))?;
    Ok(decoded.into_owned())
}
